#![allow(dead_code)]

use pattern_demos::domain::amount::PaymentAmount;
use pattern_demos::domain::ports::{ModernPaymentService, PaymentTarget};
use pattern_demos::error::Result;

/// Records every cents value the adapter hands over.
#[derive(Default)]
pub struct RecordingService {
    pub received: Vec<i64>,
}

impl ModernPaymentService for RecordingService {
    fn process(&mut self, amount_in_cents: i64) -> Result<()> {
        self.received.push(amount_in_cents);
        Ok(())
    }
}

/// Records every major-unit amount a processor forwards.
#[derive(Default)]
pub struct RecordingTarget {
    pub received: Vec<PaymentAmount>,
}

impl PaymentTarget for RecordingTarget {
    fn make_payment(&mut self, amount: PaymentAmount) -> Result<()> {
        self.received.push(amount);
        Ok(())
    }
}

pub fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("output is not valid UTF-8")
}
