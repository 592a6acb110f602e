//! Domain types and the capability traits the demos are composed from.

pub mod amount;
pub mod message;
pub mod ports;
