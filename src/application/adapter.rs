use crate::domain::amount::PaymentAmount;
use crate::domain::ports::{ModernPaymentService, PaymentTarget};
use crate::error::Result;
use tracing::debug;

/// Exposes a cents-based `ModernPaymentService` as a `PaymentTarget`.
pub struct ModernPaymentAdapter<S: ModernPaymentService> {
    modern_service: S,
}

impl<S: ModernPaymentService> ModernPaymentAdapter<S> {
    pub fn new(modern_service: S) -> Self {
        Self { modern_service }
    }

    pub fn into_inner(self) -> S {
        self.modern_service
    }
}

impl<S: ModernPaymentService> PaymentTarget for ModernPaymentAdapter<S> {
    fn make_payment(&mut self, amount: PaymentAmount) -> Result<()> {
        let cents = amount.to_cents()?;
        debug!(%amount, cents, "converted payment to minor units");
        self.modern_service.process(cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::modern::ModernPaymentApi;
    use rust_decimal_macros::dec;

    #[derive(Default)]
    struct RecordingService {
        received: Vec<i64>,
    }

    impl ModernPaymentService for RecordingService {
        fn process(&mut self, amount_in_cents: i64) -> Result<()> {
            self.received.push(amount_in_cents);
            Ok(())
        }
    }

    #[test]
    fn test_adapter_delivers_rounded_cents() {
        let mut adapter = ModernPaymentAdapter::new(RecordingService::default());
        adapter.make_payment(PaymentAmount::new(dec!(200))).unwrap();
        adapter.make_payment(PaymentAmount::new(dec!(0.125))).unwrap();
        adapter.make_payment(PaymentAmount::new(dec!(10.994))).unwrap();

        assert_eq!(adapter.into_inner().received, vec![20000, 13, 1099]);
    }

    #[test]
    fn test_adapter_prints_through_modern_api() {
        let mut adapter = ModernPaymentAdapter::new(ModernPaymentApi::with_writer(Vec::new()));
        adapter.make_payment(PaymentAmount::new(dec!(200))).unwrap();

        let out = String::from_utf8(adapter.into_inner().into_inner()).unwrap();
        assert_eq!(out, "Pagamento de R$200 via API moderna.\n");
    }

    #[test]
    fn test_adapter_rejects_unrepresentable_amount() {
        let mut adapter = ModernPaymentAdapter::new(RecordingService::default());
        let huge = PaymentAmount::new(rust_decimal::Decimal::MAX);

        assert!(adapter.make_payment(huge).is_err());
        assert!(adapter.into_inner().received.is_empty());
    }
}
