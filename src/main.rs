use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pattern_demos::interfaces::cli::{self, Cli};
use pattern_demos::interfaces::logging;
use std::io::{self, Write};

fn main() -> Result<()> {
    logging::init();
    let args = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args, &mut out).into_diagnostic()?;
    out.flush().into_diagnostic()?;

    Ok(())
}
