use crate::domain::amount::PaymentAmount;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Amount out of range: R${0} cannot be expressed in cents")]
    AmountOutOfRange(PaymentAmount),
    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
