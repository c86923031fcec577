//! # tally-core: Pure Receipt Calculation
//!
//! Computes a purchase receipt from a list of line items: per-line pre-tax and
//! tax-inclusive amounts, subtotal, per-category tax breakdown and grand
//! total. No I/O; every function is deterministic.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tally-cli: catalog ──► Vec<LineItem>                                   │
//! │                              │                                          │
//! │  ┌───────────────────────────▼─────────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    tax    │  │ calculator │  │ validation│  │   │
//! │  │   │  Receipt  │  │  rate_of  │  │  line +    │  │   rules   │  │   │
//! │  │   │  LineItem │  │           │  │  aggregate │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  └───────────────────────────┬─────────────────────────────────────┘   │
//! │                              ▼                                          │
//! │  tally-cli: printer ◄── Receipt                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, LineItem, LineResult, Receipt, TaxCategory, TaxRate
//! - [`money`] - Exact decimal Money and the monetary rounding rule
//! - [`tax`] - Tax rate table
//! - [`calculator`] - Line calculator and aggregator
//! - [`validation`] - Line item checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{compute_receipt, LineItem, Money, Product, TaxCategory};
//!
//! let items = vec![
//!     LineItem::new(Product::new("Legumbres", Money::from_cents(200), TaxCategory::Standard), 2),
//!     LineItem::new(Product::new("Perfume", Money::from_cents(2000), TaxCategory::Standard), 3),
//!     LineItem::new(Product::new("Leche", Money::from_cents(100), TaxCategory::SuperReducedC), 6),
//!     LineItem::new(Product::new("Lasaña", Money::from_cents(500), TaxCategory::SuperReducedA), 1),
//! ];
//!
//! let receipt = compute_receipt(&items).unwrap();
//! assert_eq!(receipt.totals().subtotal.to_string(), "75.00");
//! assert_eq!(receipt.totals().total_tax.to_string(), "13.69");
//! assert_eq!(receipt.totals().grand_total.to_string(), "88.69");
//! ```

pub mod calculator;
pub mod error;
pub mod money;
pub mod tax;
pub mod types;
pub mod validation;

pub use calculator::{compute_line, compute_receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use tax::rate_of;
pub use types::*;
