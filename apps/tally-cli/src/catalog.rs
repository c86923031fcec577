//! # Catalog
//!
//! Sources of line items: the built-in demo basket, or a JSON basket file.
//!
//! ## Basket File Format
//! ```json
//! [
//!   { "product": { "name": "Leche", "price": 1, "taxCategory": "superReducedC" }, "quantity": 6 }
//! ]
//! ```
//! `price` may be a JSON number or a decimal string (`"0.99"`). Unknown
//! `taxCategory` tags are accepted and taxed at 0%.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tally_core::{LineItem, Money, Product, TaxCategory};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// The fixed demonstration basket.
pub fn demo_basket() -> Vec<LineItem> {
    vec![
        demo_line("Legumbres", 200, TaxCategory::Standard, 2),
        demo_line("Perfume", 2000, TaxCategory::Standard, 3),
        demo_line("Leche", 100, TaxCategory::SuperReducedC, 6),
        demo_line("Lasaña", 500, TaxCategory::SuperReducedA, 1),
    ]
}

fn demo_line(name: &str, price_cents: i64, category: TaxCategory, quantity: i64) -> LineItem {
    LineItem::new(
        Product::new(name, Money::from_cents(price_cents), category),
        quantity,
    )
}

/// Parses a basket from JSON text.
pub fn parse_basket(json: &str) -> AppResult<Vec<LineItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a basket from a JSON file.
pub fn load_basket(path: &Path) -> AppResult<Vec<LineItem>> {
    debug!(path = %path.display(), "Loading basket");

    let file = File::open(path).map_err(|source| AppError::BasketRead {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<LineItem> = serde_json::from_reader(BufReader::new(file))?;

    let unknown = items
        .iter()
        .filter(|item| !item.product.tax_category.is_known())
        .count();
    info!(
        path = %path.display(),
        items = items.len(),
        unknown_tax_tags = unknown,
        "Basket loaded"
    );

    Ok(items)
}
