//! # Tally CLI Library
//!
//! Demonstration entry point around `tally-core`.
//!
//! ## Module Organization
//! ```text
//! tally_cli/
//! ├── lib.rs      ◄─── You are here (args, tracing, run)
//! ├── catalog.rs  ◄─── Demo basket + JSON basket loader
//! ├── printer.rs  ◄─── Receipt → text lines
//! ├── config.rs   ◄─── PrintConfig (TALLY_* env vars)
//! └── error.rs    ◄─── AppError
//! ```
//!
//! ## Run Sequence
//! 1. Initialize tracing (stderr, so stdout carries only the receipt)
//! 2. Parse arguments, load PrintConfig
//! 3. Build the basket (demo or `--basket <path>`)
//! 4. `compute_receipt`
//! 5. Print text (default) or JSON (`--json`)

pub mod catalog;
pub mod config;
pub mod error;
pub mod printer;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tally_core::compute_receipt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::catalog::{demo_basket, load_basket};
use crate::config::PrintConfig;
use crate::error::{AppError, AppResult};
use crate::printer::write_receipt;

/// Compute and print a purchase receipt.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// JSON basket file (array of line items). Defaults to the demo basket.
    #[arg(long, value_name = "PATH")]
    pub basket: Option<PathBuf>,

    /// Print the computed receipt as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Computes the receipt for the selected basket and writes it to `out`.
pub fn run<W: Write>(cli: &Cli, config: &PrintConfig, out: &mut W) -> AppResult<()> {
    let items = match &cli.basket {
        Some(path) => load_basket(path)?,
        None => {
            debug!("No basket given, using demo basket");
            demo_basket()
        }
    };

    let receipt = compute_receipt(&items)?;
    info!(
        lines = receipt.line_count(),
        grand_total = %receipt.totals().grand_total,
        "Receipt ready"
    );

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &receipt)
            .map_err(|err| AppError::Output(err.into()))?;
        writeln!(out)?;
        out.flush()?;
    } else {
        write_receipt(&receipt, config, out)?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_core=trace` - Show trace for the core crate only
/// - Default: INFO, DEBUG for tally crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_core=debug,tally_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(cli: &Cli) -> AppResult<String> {
        let mut buf = Vec::new();
        run(cli, &PrintConfig::default(), &mut buf)?;
        Ok(String::from_utf8(buf).expect("receipt is UTF-8"))
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["tally", "--basket", "cart.json", "--json"]);
        assert_eq!(cli.basket, Some(PathBuf::from("cart.json")));
        assert!(cli.json);

        let cli = Cli::parse_from(["tally"]);
        assert!(cli.basket.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_run_demo_basket_as_text() {
        let text = run_to_string(&Cli::default()).unwrap();
        assert!(text.contains("Subtotal:        75.00€"));
        assert!(text.contains("TOTAL:           88.69€"));
    }

    #[test]
    fn test_run_demo_basket_as_json() {
        let cli = Cli {
            json: true,
            ..Cli::default()
        };
        let text = run_to_string(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["totals"]["subtotal"], "75.00");
        assert_eq!(value["totals"]["totalTax"], "13.69");
        assert_eq!(value["totals"]["grandTotal"], "88.69");
        assert_eq!(value["lines"].as_array().unwrap().len(), 4);
        assert_eq!(value["taxBreakdown"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_run_basket_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "product": {{ "name": "Libro", "price": "10.00", "taxCategory": "standard" }}, "quantity": 1 }}]"#
        )
        .unwrap();

        let cli = Cli {
            basket: Some(file.path().to_path_buf()),
            json: false,
        };
        let text = run_to_string(&cli).unwrap();
        assert!(text.contains("Libro             1 x 10.00€ = 10.00€"));
        assert!(text.contains("IVA (standard):      2.10€"));
        assert!(text.contains("TOTAL:           12.10€"));
    }

    #[test]
    fn test_run_rejects_invalid_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "product": {{ "name": "Pan", "price": 1, "taxCategory": "reduced" }}, "quantity": 0 }}]"#
        )
        .unwrap();

        let cli = Cli {
            basket: Some(file.path().to_path_buf()),
            json: false,
        };
        let err = run_to_string(&cli).unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
    }

    #[test]
    fn test_run_reports_amount_overflow() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "product": {{ "name": "Yate", "price": "10000000000000000000", "taxCategory": "standard" }}, "quantity": 100000000000 }}]"#
        )
        .unwrap();

        let cli = Cli {
            basket: Some(file.path().to_path_buf()),
            json: false,
        };
        let err = run_to_string(&cli).unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(tally_core::CoreError::AmountOverflow { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Amount too large while computing line total for Yate"
        );
    }
}
