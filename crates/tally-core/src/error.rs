//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Line items the calculator refuses, overflow    │
//! │  └── ValidationError  - Malformed product fields                       │
//! │                                                                         │
//! │  tally-cli errors (app crate)                                          │
//! │  └── AppError         - File, JSON and output failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failing line aborts the whole receipt. There is no partial result.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while computing a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Quantity is zero or negative.
    ///
    /// ## When This Occurs
    /// - Basket file lists `"quantity": 0`
    /// - A refund line was passed in (refunds are not supported)
    #[error("Invalid quantity for {product}: {quantity} (must be a positive integer)")]
    InvalidQuantity { product: String, quantity: i64 },

    /// Unit price is negative. The message shows the exact price, so a
    /// sub-cent amount such as `-0.001` is not hidden by rounding.
    #[error("Invalid unit price for {}: {} (must not be negative)", .product, .price.amount())]
    InvalidPrice { product: String, price: Money },

    /// A figure does not fit in the decimal range.
    ///
    /// ## When This Occurs
    /// - Basket file with an absurd price × quantity
    /// - Enough huge lines that the subtotal or a tax accumulator overflows
    #[error("Amount too large while computing {figure}")]
    AmountOverflow { figure: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity {
            product: "Leche".to_string(),
            quantity: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity for Leche: 0 (must be a positive integer)"
        );

        let err = CoreError::InvalidPrice {
            product: "Perfume".to_string(),
            price: Money::from_cents(-150),
        };
        assert_eq!(
            err.to_string(),
            "Invalid unit price for Perfume: -1.50 (must not be negative)"
        );

        let err = CoreError::AmountOverflow {
            figure: "subtotal".to_string(),
        };
        assert_eq!(err.to_string(), "Amount too large while computing subtotal");
    }

    #[test]
    fn test_invalid_price_shows_exact_amount() {
        let err = CoreError::InvalidPrice {
            product: "Tornillo".to_string(),
            price: Money::new(rust_decimal::Decimal::new(-1, 3)),
        };
        assert_eq!(
            err.to_string(),
            "Invalid unit price for Tornillo: -0.001 (must not be negative)"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(validation_err.to_string(), "name is required");

        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
