//! Application layer composing the domain capabilities.
//!
//! `PaymentProcessor` consumes any `PaymentTarget`, `ModernPaymentAdapter`
//! bridges a cents-based service into that capability, and the decorators
//! stack text transformations on top of any `TextSource`.

pub mod adapter;
pub mod decorators;
pub mod processor;
