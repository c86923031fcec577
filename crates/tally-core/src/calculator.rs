//! # Receipt Calculator
//!
//! Line Calculator and Aggregator.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  &[LineItem]                                                            │
//! │      │ compute_line (validate, price × qty, + tax, round once)          │
//! │      ▼                                                                  │
//! │  Vec<LineResult> ──┬──► Σ pre_tax (exact) ──► round ──► subtotal        │
//! │                    │                                                    │
//! │                    └──► group by category, Σ raw tax (exact)            │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                    Vec<CategoryTaxAmount> ──► Σ ──► round ──► total_tax │
//! │                                                                         │
//! │  grand_total = round(subtotal + total_tax)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Accumulate exact, round once per reported figure. A category's tax is
//! recomputed from the unrounded pre-tax amount of each line, never derived
//! from the rounded tax-inclusive line figure.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tax::rate_of;
use crate::types::{CategoryTaxAmount, LineItem, LineResult, Receipt, ReceiptTotals, TaxCategory};
use crate::validation::validate_line_item;

/// Computes one line.
///
/// The pre-tax amount is stored exact; only the tax-inclusive amount is
/// rounded.
///
/// ## Example
/// ```rust
/// use tally_core::calculator::compute_line;
/// use tally_core::{LineItem, Money, Product, TaxCategory};
///
/// let item = LineItem::new(
///     Product::new("Perfume", Money::from_cents(2000), TaxCategory::Standard),
///     3,
/// );
/// let line = compute_line(&item).unwrap();
/// assert_eq!(line.pre_tax_amount, Money::from_cents(6000));
/// assert_eq!(line.tax_inclusive_amount, Money::from_cents(7260));
/// ```
///
/// ## Errors
/// `InvalidQuantity`, `InvalidPrice` or a blank-name `Validation` error;
/// `AmountOverflow` if price × quantity or its tax leaves the decimal range.
pub fn compute_line(item: &LineItem) -> CoreResult<LineResult> {
    validate_line_item(item)?;

    let product = &item.product;
    let too_large = || overflow(format!("line total for {}", product.name));

    let pre_tax_amount = product
        .price
        .checked_multiply_quantity(item.quantity)
        .ok_or_else(too_large)?;
    let tax = pre_tax_amount
        .checked_calculate_tax(rate_of(&product.tax_category))
        .ok_or_else(too_large)?;
    let tax_inclusive_amount = pre_tax_amount.checked_add(tax).ok_or_else(too_large)?;

    Ok(LineResult {
        name: product.name.clone(),
        quantity: item.quantity,
        unit_price: product.price,
        pre_tax_amount,
        tax_category: product.tax_category.clone(),
        tax_inclusive_amount: tax_inclusive_amount.round(),
    })
}

/// Sum of the exact pre-tax amounts, rounded once.
pub fn compute_subtotal(lines: &[LineResult]) -> CoreResult<Money> {
    let exact = checked_sum(lines.iter().map(|line| line.pre_tax_amount))
        .ok_or_else(|| overflow("subtotal"))?;
    Ok(exact.round())
}

/// Groups raw tax by category, in first-seen order. Entries stay unrounded.
pub fn compute_tax_breakdown(lines: &[LineResult]) -> CoreResult<Vec<CategoryTaxAmount>> {
    let mut accumulators: IndexMap<&TaxCategory, Money> = IndexMap::new();

    for line in lines {
        let category = &line.tax_category;
        let too_large = || overflow(format!("tax for {category}"));

        let contribution = line
            .pre_tax_amount
            .checked_calculate_tax(rate_of(category))
            .ok_or_else(too_large)?;
        let accumulator = accumulators.entry(category).or_default();
        *accumulator = accumulator.checked_add(contribution).ok_or_else(too_large)?;
    }

    Ok(accumulators
        .into_iter()
        .map(|(category, amount)| CategoryTaxAmount {
            tax_category: category.clone(),
            amount,
        })
        .collect())
}

/// Sum of the unrounded category accumulators, rounded once.
pub fn compute_total_tax(breakdown: &[CategoryTaxAmount]) -> CoreResult<Money> {
    let exact = checked_sum(breakdown.iter().map(|entry| entry.amount))
        .ok_or_else(|| overflow("total tax"))?;
    Ok(exact.round())
}

fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
    amounts
        .into_iter()
        .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
}

fn overflow(figure: impl Into<String>) -> CoreError {
    CoreError::AmountOverflow {
        figure: figure.into(),
    }
}

/// Computes the full receipt.
///
/// All-or-nothing: the first invalid line, or any figure that overflows,
/// fails the call and no receipt is produced. An empty slice yields an all-zero receipt.
///
/// ## Example
/// ```rust
/// use tally_core::calculator::compute_receipt;
/// use tally_core::{LineItem, Money, Product, TaxCategory};
///
/// let items = vec![LineItem::new(
///     Product::new("Lasaña", Money::from_cents(500), TaxCategory::SuperReducedA),
///     1,
/// )];
/// let receipt = compute_receipt(&items).unwrap();
/// assert_eq!(receipt.totals().subtotal, Money::from_cents(500));
/// assert_eq!(receipt.totals().total_tax, Money::from_cents(25));
/// assert_eq!(receipt.totals().grand_total, Money::from_cents(525));
/// ```
pub fn compute_receipt(items: &[LineItem]) -> CoreResult<Receipt> {
    let lines = items
        .iter()
        .map(compute_line)
        .collect::<CoreResult<Vec<_>>>()?;

    let subtotal = compute_subtotal(&lines)?;
    let tax_breakdown = compute_tax_breakdown(&lines)?;
    let total_tax = compute_total_tax(&tax_breakdown)?;
    let grand_total = subtotal
        .checked_add(total_tax)
        .ok_or_else(|| overflow("grand total"))?
        .round();

    debug!(
        lines = lines.len(),
        categories = tax_breakdown.len(),
        %subtotal,
        %total_tax,
        %grand_total,
        "Receipt computed"
    );

    Ok(Receipt::new(
        lines,
        ReceiptTotals {
            subtotal,
            total_tax,
            grand_total,
        },
        tax_breakdown,
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
