use super::amount::PaymentAmount;
use crate::error::Result;

/// The capability a `PaymentProcessor` depends on: pay an amount given in
/// major currency units.
pub trait PaymentTarget {
    fn make_payment(&mut self, amount: PaymentAmount) -> Result<()>;
}

/// A payment service that only understands minor units (cents).
pub trait ModernPaymentService {
    fn process(&mut self, amount_in_cents: i64) -> Result<()>;
}

/// Anything that produces a piece of text on request.
pub trait TextSource {
    fn text(&self) -> String;
}

pub type PaymentTargetBox = Box<dyn PaymentTarget>;
pub type TextSourceBox = Box<dyn TextSource>;

impl<T: PaymentTarget + ?Sized> PaymentTarget for Box<T> {
    fn make_payment(&mut self, amount: PaymentAmount) -> Result<()> {
        (**self).make_payment(amount)
    }
}

impl<T: PaymentTarget + ?Sized> PaymentTarget for &mut T {
    fn make_payment(&mut self, amount: PaymentAmount) -> Result<()> {
        (**self).make_payment(amount)
    }
}

impl<T: ModernPaymentService + ?Sized> ModernPaymentService for &mut T {
    fn process(&mut self, amount_in_cents: i64) -> Result<()> {
        (**self).process(amount_in_cents)
    }
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn text(&self) -> String {
        (**self).text()
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn text(&self) -> String {
        (**self).text()
    }
}
