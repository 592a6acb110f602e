use crate::application::adapter::ModernPaymentAdapter;
use crate::application::decorators::{
    CapitalizeDecorator, EmphasizeDecorator, ProfanityFilterDecorator, Replacements,
};
use crate::application::processor::PaymentProcessor;
use crate::domain::amount::PaymentAmount;
use crate::domain::message::Message;
use crate::domain::ports::{PaymentTarget, TextSource, TextSourceBox};
use crate::error::Result;
use crate::infrastructure::legacy::LegacyPaymentSystem;
use crate::infrastructure::modern::ModernPaymentApi;
use clap::ValueEnum;
use rust_decimal_macros::dec;
use std::io::Write;
use tracing::{debug, info};

pub const DEMO_MESSAGE: &str = "hoje o dia está horrível";

/// Which payment system backs the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemKind {
    Legacy,
    /// The modern cents-based API, reached through the adapter.
    Modern,
}

/// One link of a decorator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layer {
    Profanity,
    Capitalize,
    Emphasize,
}

impl Layer {
    /// Profanity filter innermost, emphasis outermost.
    pub const CANONICAL: [Layer; 3] = [Layer::Profanity, Layer::Capitalize, Layer::Emphasize];
}

/// Pays `amount` once through a `PaymentProcessor` backed by `system`.
pub fn pay<W: Write>(out: &mut W, amount: PaymentAmount, system: SystemKind) -> Result<()> {
    let target: Box<dyn PaymentTarget + '_> = match system {
        SystemKind::Legacy => Box::new(LegacyPaymentSystem::with_writer(out)),
        SystemKind::Modern => Box::new(ModernPaymentAdapter::new(ModernPaymentApi::with_writer(
            out,
        ))),
    };
    PaymentProcessor::new(target).pay(amount)
}

/// Wraps `message` in `layers`, the first layer being the innermost.
pub fn build_chain(
    message: Message,
    layers: &[Layer],
    replacements: &Replacements,
) -> Result<TextSourceBox> {
    let mut chain: TextSourceBox = Box::new(message);
    for layer in layers {
        debug!(?layer, "wrapping decorator");
        chain = match layer {
            Layer::Profanity => Box::new(ProfanityFilterDecorator::with_replacements(
                chain,
                replacements.clone(),
            )?),
            Layer::Capitalize => Box::new(CapitalizeDecorator::new(chain)),
            Layer::Emphasize => Box::new(EmphasizeDecorator::new(chain)),
        };
    }
    Ok(chain)
}

pub fn write_comparison<W: Write>(
    out: &mut W,
    original: &impl TextSource,
    decorated: &impl TextSource,
) -> Result<()> {
    writeln!(out, "Original: {}", original.text())?;
    writeln!(out, "Decorated: {}", decorated.text())?;
    Ok(())
}

/// Runs `text` through the decorator chain described by `layers` and prints
/// both versions. An empty `layers` slice means the canonical order.
pub fn decorate<W: Write>(
    out: &mut W,
    text: &str,
    layers: &[Layer],
    replacements: &Replacements,
) -> Result<()> {
    let layers = if layers.is_empty() {
        &Layer::CANONICAL[..]
    } else {
        layers
    };
    let message = Message::new(text);
    let decorated = build_chain(message.clone(), layers, replacements)?;
    write_comparison(out, &message, &decorated)
}

/// Legacy system pays 100, then the adapted modern API pays 200.
pub fn run_payment_demo<W: Write>(out: &mut W) -> Result<()> {
    info!("running adapter demo");
    let mut processor_legacy = PaymentProcessor::new(LegacyPaymentSystem::with_writer(&mut *out));
    processor_legacy.pay(PaymentAmount::new(dec!(100)))?;

    let adapted_modern = ModernPaymentAdapter::new(ModernPaymentApi::with_writer(&mut *out));
    let mut processor_adapted = PaymentProcessor::new(adapted_modern);
    processor_adapted.pay(PaymentAmount::new(dec!(200)))
}

/// Filters, capitalizes and emphasizes the demo message.
pub fn run_decorator_demo<W: Write>(out: &mut W) -> Result<()> {
    info!("running decorator demo");
    let msg = Message::new(DEMO_MESSAGE);
    let decorated = EmphasizeDecorator::new(CapitalizeDecorator::new(
        ProfanityFilterDecorator::with_replacements(
            &msg,
            Replacements::with_overrides([("horrível", "horrível (ruim)")]),
        )?,
    ));
    write_comparison(out, &msg, &decorated)
}
