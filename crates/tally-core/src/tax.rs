//! # Tax Rate Table
//!
//! Fixed category → percentage mapping. Rates are part of the domain and are
//! not configurable at runtime.

use crate::types::{TaxCategory, TaxRate};

pub const STANDARD_PERCENT: u32 = 21;
pub const REDUCED_PERCENT: u32 = 10;
pub const SUPER_REDUCED_A_PERCENT: u32 = 5;
pub const SUPER_REDUCED_B_PERCENT: u32 = 4;
pub const SUPER_REDUCED_C_PERCENT: u32 = 0;
pub const EXEMPT_PERCENT: u32 = 0;

/// Returns the rate of a category. Never fails: unrecognized tags are 0%.
///
/// ## Example
/// ```rust
/// use tally_core::tax::rate_of;
/// use tally_core::{TaxCategory, TaxRate};
///
/// assert_eq!(rate_of(&TaxCategory::Standard), TaxRate::from_percent(21));
/// assert_eq!(rate_of(&TaxCategory::from_tag("luxury")), TaxRate::zero());
/// ```
pub fn rate_of(category: &TaxCategory) -> TaxRate {
    let percent = match category {
        TaxCategory::Standard => STANDARD_PERCENT,
        TaxCategory::Reduced => REDUCED_PERCENT,
        TaxCategory::SuperReducedA => SUPER_REDUCED_A_PERCENT,
        TaxCategory::SuperReducedB => SUPER_REDUCED_B_PERCENT,
        TaxCategory::SuperReducedC => SUPER_REDUCED_C_PERCENT,
        TaxCategory::Exempt => EXEMPT_PERCENT,
        TaxCategory::Unrecognized(_) => return TaxRate::zero(),
    };
    TaxRate::from_percent(percent)
}

impl TaxCategory {
    /// Shorthand for [`rate_of`].
    pub fn rate(&self) -> TaxRate {
        rate_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_known_rates() {
        let expected = [
            (TaxCategory::Standard, dec!(21)),
            (TaxCategory::Reduced, dec!(10)),
            (TaxCategory::SuperReducedA, dec!(5)),
            (TaxCategory::SuperReducedB, dec!(4)),
            (TaxCategory::SuperReducedC, dec!(0)),
            (TaxCategory::Exempt, dec!(0)),
        ];
        for (category, percent) in expected {
            assert_eq!(rate_of(&category).percentage(), percent, "{category}");
        }
    }

    #[test]
    fn test_unrecognized_tag_is_zero_rated() {
        let category = TaxCategory::from_tag("");
        assert!(rate_of(&category).is_zero());
        assert!(TaxCategory::from_tag("luxury").rate().is_zero());
    }

    #[test]
    fn test_legacy_alias_gets_same_rate() {
        assert_eq!(
            TaxCategory::from_tag("general").rate(),
            TaxCategory::Standard.rate()
        );
    }
}
