use super::demo::{self, Layer, SystemKind};
use crate::application::decorators::Replacements;
use crate::domain::amount::PaymentAmount;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Adapter and decorator pattern demos.
///
/// Without a subcommand both canonical demos run, one after the other.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pay an amount (in reais) through a payment processor
    Pay {
        #[arg(allow_negative_numbers = true)]
        amount: PaymentAmount,

        /// Payment system behind the processor
        #[arg(long, value_enum, default_value_t = SystemKind::Legacy)]
        system: SystemKind,
    },
    /// Run a message through a chain of decorators
    Decorate {
        text: String,

        /// Decorator to wrap, innermost first. Repeatable; defaults to
        /// profanity, capitalize, emphasize
        #[arg(long = "layer", value_enum)]
        layers: Vec<Layer>,

        /// Extra profanity replacement as BAD=REPLACEMENT. Repeatable
        #[arg(long = "replace", value_parser = parse_replacement)]
        replacements: Vec<(String, String)>,
    },
}

fn parse_replacement(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(bad, replacement)| (bad.to_string(), replacement.to_string()))
        .ok_or_else(|| format!("invalid BAD=REPLACEMENT: no `=` found in `{s}`"))
}

/// Executes the parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        None => {
            demo::run_payment_demo(out)?;
            demo::run_decorator_demo(out)
        }
        Some(Command::Pay { amount, system }) => demo::pay(out, amount, system),
        Some(Command::Decorate {
            text,
            layers,
            replacements,
        }) => {
            let replacements = Replacements::with_overrides(replacements);
            demo::decorate(out, &text, &layers, &replacements)
        }
    }
}
