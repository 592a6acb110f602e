use crate::domain::amount::PaymentAmount;
use crate::domain::ports::PaymentTarget;
use crate::error::Result;
use std::io::{self, Stdout, Write};

/// The legacy payment system, which already speaks in major units.
///
/// Confirmations go to stdout by default; any `Write` sink can be plugged in
/// with [`LegacyPaymentSystem::with_writer`].
pub struct LegacyPaymentSystem<W: Write = Stdout> {
    out: W,
}

impl LegacyPaymentSystem {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for LegacyPaymentSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LegacyPaymentSystem<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consumes the system and returns the sink it was writing to.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PaymentTarget for LegacyPaymentSystem<W> {
    fn make_payment(&mut self, amount: PaymentAmount) -> Result<()> {
        writeln!(self.out, "Pagando R${amount} com sistema legado.")?;
        Ok(())
    }
}
