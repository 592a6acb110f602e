//! Outer surface of the binary: command line, demo scenarios and logging.

pub mod cli;
pub mod demo;
pub mod logging;
