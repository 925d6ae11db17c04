// ============================================================================
// Jamabandi Share Domain Model
// ============================================================================

use super::EntryId;
use crate::numeric::{Farrad, Fraction};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fractional share registered against the total land.
///
/// `fraction` is the parsed, unreduced form of `fraction_text`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareEntry {
    pub id: EntryId,
    pub fraction_text: String,
    pub fraction: Fraction,
    pub created_at: DateTime<Utc>,
}

impl ShareEntry {
    pub fn new(fraction_text: impl Into<String>, fraction: Fraction) -> Self {
        Self {
            id: EntryId::new(),
            fraction_text: fraction_text.into(),
            fraction,
            created_at: Utc::now(),
        }
    }
}

/// Computed value of one share, in Farrad
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareValue {
    pub id: EntryId,
    pub fraction: Fraction,
    pub value: Decimal,
}

/// Outcome of a Jamabandi calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JamabandiReport {
    /// Total land the shares were taken from
    pub total_land: Farrad,

    /// One value per share, in entry order
    pub shares: Vec<ShareValue>,

    /// Sum of the (already rounded) share values
    pub sum_of_shares: Decimal,

    /// `sum_of_shares / total_land`
    pub final_ratio: Decimal,
}

impl JamabandiReport {
    /// Whether the shares add up to the whole land (ratio of exactly one)
    pub fn is_fully_allocated(&self) -> bool {
        self.final_ratio == Decimal::ONE
    }

    /// Land not covered by any share (negative when over-allocated)
    pub fn unallocated(&self) -> Decimal {
        Decimal::from(self.total_land) - self.sum_of_shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(sum: Decimal, ratio: Decimal) -> JamabandiReport {
        JamabandiReport {
            total_land: 205,
            shares: Vec::new(),
            sum_of_shares: sum,
            final_ratio: ratio,
        }
    }

    #[test]
    fn test_share_entry_keeps_text() {
        let fraction = Fraction::from_parts(6, 8).unwrap();
        let entry = ShareEntry::new("6/8", fraction);
        assert_eq!(entry.fraction_text, "6/8");
        assert_eq!(entry.fraction, fraction);
    }

    #[test]
    fn test_allocation_helpers() {
        let full = report(Decimal::from(205), Decimal::ONE);
        assert!(full.is_fully_allocated());
        assert_eq!(full.unallocated(), Decimal::ZERO);

        let partial = report(Decimal::new(615, 1), Decimal::new(3, 1));
        assert!(!partial.is_fully_allocated());
        assert_eq!(partial.unallocated(), Decimal::new(1435, 1));
    }
}
