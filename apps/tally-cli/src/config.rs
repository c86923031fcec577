//! # Print Configuration
//!
//! Presentation settings for the printed receipt.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! Tax rates are not configurable here; they live in `tally_core::tax`.
//! Configuration is read once at startup and is read-only afterwards.

use tracing::warn;

/// Receipt presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Heading printed between the top rules.
    pub title: String,

    /// Optional store name printed under the title.
    pub store_name: Option<String>,

    /// Symbol appended to every amount.
    pub currency_symbol: String,

    /// Label in front of each tax breakdown row, e.g. `IVA (standard)`.
    pub tax_label: String,

    /// Width of the `-----` rules, in characters.
    pub width: usize,
}

impl Default for PrintConfig {
    /// ## Default Values
    /// - Title: "TICKET DE COMPRA"
    /// - Currency: €
    /// - Tax label: IVA
    /// - Width: 37
    fn default() -> Self {
        PrintConfig {
            title: "TICKET DE COMPRA".to_string(),
            store_name: None,
            currency_symbol: "€".to_string(),
            tax_label: "IVA".to_string(),
            width: 37,
        }
    }
}

impl PrintConfig {
    /// Creates a PrintConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_TITLE`: Override the heading
    /// - `TALLY_STORE_NAME`: Print a store name under the heading
    /// - `TALLY_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `TALLY_TAX_LABEL`: Override the tax label
    /// - `TALLY_RECEIPT_WIDTH`: Override the rule width (e.g. "42")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PrintConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PrintConfig::default();

        if let Some(title) = lookup("TALLY_TITLE") {
            config.title = title;
        }

        if let Some(store_name) = lookup("TALLY_STORE_NAME") {
            if !store_name.trim().is_empty() {
                config.store_name = Some(store_name);
            }
        }

        if let Some(symbol) = lookup("TALLY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(label) = lookup("TALLY_TAX_LABEL") {
            config.tax_label = label;
        }

        if let Some(width) = lookup("TALLY_RECEIPT_WIDTH") {
            match width.parse::<usize>() {
                Ok(width) if width > 0 => config.width = width,
                _ => warn!(%width, "Ignoring invalid TALLY_RECEIPT_WIDTH"),
            }
        }

        config
    }
}
