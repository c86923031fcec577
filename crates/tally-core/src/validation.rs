//! # Validation Module
//!
//! Checks a line item before it enters the calculator.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Condition                 Outcome                                      │
//! │  ──────────────────────    ──────────────────────────────────────────   │
//! │  blank product name        ValidationError::Required { "name" }         │
//! │  quantity <= 0             CoreError::InvalidQuantity                   │
//! │  unit price < 0            CoreError::InvalidPrice                      │
//! │  zero unit price           OK (free item)                               │
//! │  unknown tax tag           OK (0% rate, see tax::rate_of)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;

/// Result type for field validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name: must not be blank.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Leche").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity: must be positive (> 0).
pub fn validate_quantity(product: &str, quantity: i64) -> CoreResult<()> {
    if quantity <= 0 {
        return Err(CoreError::InvalidQuantity {
            product: product.to_string(),
            quantity,
        });
    }

    Ok(())
}

/// Validates a unit price: must be non-negative. Zero is allowed.
pub fn validate_unit_price(product: &str, price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice {
            product: product.to_string(),
            price,
        });
    }

    Ok(())
}

/// Runs every check on one line item, name first.
pub fn validate_line_item(item: &LineItem) -> CoreResult<()> {
    let product = &item.product;
    validate_product_name(&product.name)?;
    validate_quantity(&product.name, item.quantity)?;
    validate_unit_price(&product.name, product.price)?;
    Ok(())
}
