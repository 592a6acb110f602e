//! Concrete payment systems that write their confirmations to an output sink.

pub mod legacy;
pub mod modern;
