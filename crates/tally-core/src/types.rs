//! # Domain Types
//!
//! Input and output types of the receipt calculation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INPUT (from the catalog)            OUTPUT (to the printer)            │
//! │                                                                         │
//! │  ┌─────────────────┐                 ┌──────────────────────────────┐   │
//! │  │    LineItem     │   compute_line  │          Receipt             │   │
//! │  │  product ───────┼──┐  ────────►   │  lines: Vec<LineResult>      │   │
//! │  │  quantity       │  │              │  totals: ReceiptTotals       │   │
//! │  └─────────────────┘  │              │  tax_breakdown:              │   │
//! │  ┌─────────────────┐  │              │      Vec<CategoryTaxAmount>  │   │
//! │  │    Product      │◄─┘              └──────────────────────────────┘   │
//! │  │  name           │                                                    │
//! │  │  price (Money)  │                 ┌─────────────────┐                │
//! │  │  tax_category ──┼───────────────► │  TaxCategory    │──► TaxRate     │
//! │  └─────────────────┘                 └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All JSON field names are camelCase.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// A tax rate expressed as a percentage (21 = 21%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a rate from a whole percentage.
    #[inline]
    pub fn from_percent(pct: u32) -> Self {
        TaxRate(Decimal::from(pct))
    }

    /// Creates a rate from a (possibly fractional) percentage.
    #[inline]
    pub const fn from_percentage(pct: Decimal) -> Self {
        TaxRate(pct)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Tax Category
// =============================================================================

/// The closed set of tax categories a product can be tagged with.
///
/// Parsing a tag never fails. A tag outside the known set becomes
/// [`TaxCategory::Unrecognized`], keeps its original text for grouping and
/// labels, and is taxed at 0%.
///
/// ## Tags
/// | Variant         | Canonical tag    | Legacy alias     | Rate |
/// |-----------------|------------------|------------------|------|
/// | `Standard`      | `standard`       | `general`        | 21%  |
/// | `Reduced`       | `reduced`        | `reducido`       | 10%  |
/// | `SuperReducedA` | `superReducedA`  | `superreducidoA` | 5%   |
/// | `SuperReducedB` | `superReducedB`  | `superreducidoB` | 4%   |
/// | `SuperReducedC` | `superReducedC`  | `superreducidoC` | 0%   |
/// | `Exempt`        | `exempt`         | `sinIva`         | 0%   |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaxCategory {
    Standard,
    Reduced,
    SuperReducedA,
    SuperReducedB,
    SuperReducedC,
    Exempt,
    /// Any other tag, kept verbatim.
    Unrecognized(String),
}

impl TaxCategory {
    /// The known categories, in declaration order.
    pub const KNOWN: [TaxCategory; 6] = [
        TaxCategory::Standard,
        TaxCategory::Reduced,
        TaxCategory::SuperReducedA,
        TaxCategory::SuperReducedB,
        TaxCategory::SuperReducedC,
        TaxCategory::Exempt,
    ];

    /// Parses a tag. Total: unknown tags map to `Unrecognized`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::TaxCategory;
    ///
    /// assert_eq!(TaxCategory::from_tag("standard"), TaxCategory::Standard);
    /// assert_eq!(TaxCategory::from_tag("general"), TaxCategory::Standard);
    /// assert_eq!(
    ///     TaxCategory::from_tag("luxury"),
    ///     TaxCategory::Unrecognized("luxury".to_string())
    /// );
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "standard" | "general" => TaxCategory::Standard,
            "reduced" | "reducido" => TaxCategory::Reduced,
            "superReducedA" | "superreducidoA" => TaxCategory::SuperReducedA,
            "superReducedB" | "superreducidoB" => TaxCategory::SuperReducedB,
            "superReducedC" | "superreducidoC" => TaxCategory::SuperReducedC,
            "exempt" | "sinIva" => TaxCategory::Exempt,
            other => TaxCategory::Unrecognized(other.to_string()),
        }
    }

    /// Canonical tag, or the preserved text of an unrecognized one.
    pub fn tag(&self) -> &str {
        match self {
            TaxCategory::Standard => "standard",
            TaxCategory::Reduced => "reduced",
            TaxCategory::SuperReducedA => "superReducedA",
            TaxCategory::SuperReducedB => "superReducedB",
            TaxCategory::SuperReducedC => "superReducedC",
            TaxCategory::Exempt => "exempt",
            TaxCategory::Unrecognized(tag) => tag,
        }
    }

    /// Whether the tag belongs to the known set.
    pub fn is_known(&self) -> bool {
        !matches!(self, TaxCategory::Unrecognized(_))
    }
}

impl From<String> for TaxCategory {
    fn from(tag: String) -> Self {
        TaxCategory::from_tag(&tag)
    }
}

impl From<&str> for TaxCategory {
    fn from(tag: &str) -> Self {
        TaxCategory::from_tag(tag)
    }
}

impl From<TaxCategory> for String {
    fn from(category: TaxCategory) -> Self {
        match category {
            TaxCategory::Unrecognized(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

// =============================================================================
// Product / Line Item (input)
// =============================================================================

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name shown on the receipt.
    pub name: String,

    /// Unit price in currency units.
    pub price: Money,

    pub tax_category: TaxCategory,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, tax_category: TaxCategory) -> Self {
        Product {
            name: name.into(),
            price,
            tax_category,
        }
    }
}

/// A product and how many units of it were bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: Product,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        LineItem { product, quantity }
    }
}

// =============================================================================
// Line Result / Breakdown / Totals (output)
// =============================================================================

/// Computed figures for one line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,

    /// `unit_price × quantity`, exact and unrounded.
    pub pre_tax_amount: Money,

    pub tax_category: TaxCategory,

    /// Pre-tax amount plus tax, rounded to two decimals.
    pub tax_inclusive_amount: Money,
}

/// Tax accumulated by every line of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTaxAmount {
    pub tax_category: TaxCategory,

    /// Unrounded running sum of raw per-line contributions.
    pub amount: Money,
}

impl CategoryTaxAmount {
    /// The amount as it is reported (two decimals).
    pub fn rounded_amount(&self) -> Money {
        self.amount.round()
    }
}

/// Rounded receipt totals.
///
/// `grand_total == round(subtotal + total_tax)` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptTotals {
    pub subtotal: Money,
    pub total_tax: Money,
    pub grand_total: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// The computed receipt.
///
/// Built only by [`crate::calculator::compute_receipt`]; read-only afterwards.
///
/// - `lines` keep input order
/// - `tax_breakdown` keeps first-seen category order, one entry per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    lines: Vec<LineResult>,
    totals: ReceiptTotals,
    tax_breakdown: Vec<CategoryTaxAmount>,
}

impl Receipt {
    pub(crate) fn new(
        lines: Vec<LineResult>,
        totals: ReceiptTotals,
        tax_breakdown: Vec<CategoryTaxAmount>,
    ) -> Self {
        Receipt {
            lines,
            totals,
            tax_breakdown,
        }
    }

    pub fn lines(&self) -> &[LineResult] {
        &self.lines
    }

    pub fn totals(&self) -> &ReceiptTotals {
        &self.totals
    }

    pub fn tax_breakdown(&self) -> &[CategoryTaxAmount] {
        &self.tax_breakdown
    }

    /// Looks up the breakdown entry of one category.
    pub fn tax_for(&self, category: &TaxCategory) -> Option<&CategoryTaxAmount> {
        self.tax_breakdown
            .iter()
            .find(|entry| &entry.tax_category == category)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
