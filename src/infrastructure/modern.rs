use crate::domain::amount::PaymentAmount;
use crate::domain::ports::ModernPaymentService;
use crate::error::Result;
use std::io::{self, Stdout, Write};

/// The modern payment API. It takes amounts in cents and does not implement
/// `PaymentTarget`; use `ModernPaymentAdapter` to plug it into a processor.
pub struct ModernPaymentApi<W: Write = Stdout> {
    out: W,
}

impl ModernPaymentApi {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ModernPaymentApi {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ModernPaymentApi<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ModernPaymentService for ModernPaymentApi<W> {
    fn process(&mut self, amount_in_cents: i64) -> Result<()> {
        let amount = PaymentAmount::from_cents(amount_in_cents);
        writeln!(self.out, "Pagamento de R${amount} via API moderna.")?;
        Ok(())
    }
}
