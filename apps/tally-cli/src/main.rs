//! # Tally Entry Point
//!
//! ```text
//! tally                          # demo basket, text receipt
//! tally --basket cart.json       # basket from a JSON file
//! tally --basket cart.json --json
//! ```
//!
//! Logs go to stderr; the receipt goes to stdout.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tally_cli::config::PrintConfig;
use tally_cli::Cli;
use tracing::error;

fn main() -> ExitCode {
    tally_cli::init_tracing();

    let cli = Cli::parse();
    let config = PrintConfig::from_env();

    let stdout = io::stdout();
    match tally_cli::run(&cli, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Failed to produce receipt");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
