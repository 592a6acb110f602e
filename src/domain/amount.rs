use crate::error::{DemoError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

const CENTS_PER_UNIT: Decimal = dec!(100);

/// A payment value in major currency units (reais).
///
/// Unlike a transaction amount in a ledger, this value object carries no
/// validation: zero and negative values pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PaymentAmount(Decimal);

impl PaymentAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Builds an amount from minor units, e.g. `20000` cents is `200`.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Converts to minor units, rounding half a cent up (towards positive
    /// infinity) instead of truncating.
    ///
    /// Fails only when the result does not fit an `i64`.
    pub fn to_cents(&self) -> Result<i64> {
        self.0
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|scaled| scaled.checked_add(dec!(0.5)))
            .map(|shifted| shifted.floor())
            .and_then(|cents| cents.to_i64())
            .ok_or(DemoError::AmountOutOfRange(*self))
    }
}

impl From<Decimal> for PaymentAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<PaymentAmount> for Decimal {
    fn from(amount: PaymentAmount) -> Self {
        amount.0
    }
}

impl FromStr for PaymentAmount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

// Prints like a plain number: no trailing zeros, no forced scale.
impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
