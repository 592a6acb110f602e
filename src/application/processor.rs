use crate::domain::amount::PaymentAmount;
use crate::domain::ports::PaymentTarget;
use crate::error::Result;
use tracing::debug;

/// Pays through whatever `PaymentTarget` it was built with.
///
/// The processor neither knows nor cares whether the target is the legacy
/// system or an adapted modern API, and it performs no validation of its own.
pub struct PaymentProcessor<T: PaymentTarget> {
    system: T,
}

impl<T: PaymentTarget> PaymentProcessor<T> {
    pub fn new(system: T) -> Self {
        Self { system }
    }

    pub fn pay(&mut self, amount: PaymentAmount) -> Result<()> {
        debug!(%amount, "forwarding payment");
        self.system.make_payment(amount)
    }

    pub fn into_inner(self) -> T {
        self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::adapter::ModernPaymentAdapter;
    use crate::domain::ports::PaymentTargetBox;
    use crate::infrastructure::legacy::LegacyPaymentSystem;
    use crate::infrastructure::modern::ModernPaymentApi;
    use rust_decimal_macros::dec;

    #[test]
    fn test_processor_with_legacy_system() {
        let mut processor = PaymentProcessor::new(LegacyPaymentSystem::with_writer(Vec::new()));
        processor.pay(PaymentAmount::new(dec!(100))).unwrap();

        let out = String::from_utf8(processor.into_inner().into_inner()).unwrap();
        assert_eq!(out, "Pagando R$100 com sistema legado.\n");
    }

    #[test]
    fn test_processor_with_adapted_modern_system() {
        let adapter = ModernPaymentAdapter::new(ModernPaymentApi::with_writer(Vec::new()));
        let mut processor = PaymentProcessor::new(adapter);
        processor.pay(PaymentAmount::new(dec!(200))).unwrap();

        let out = String::from_utf8(processor.into_inner().into_inner().into_inner()).unwrap();
        assert_eq!(out, "Pagamento de R$200 via API moderna.\n");
    }

    #[test]
    fn test_processor_over_boxed_targets() {
        let targets: Vec<PaymentTargetBox> = vec![
            Box::new(LegacyPaymentSystem::with_writer(std::io::sink())),
            Box::new(ModernPaymentAdapter::new(ModernPaymentApi::with_writer(
                std::io::sink(),
            ))),
        ];

        for target in targets {
            let mut processor = PaymentProcessor::new(target);
            processor.pay(PaymentAmount::new(dec!(-1))).unwrap();
        }
    }
}
