// ============================================================================
// Land Units
// Kanal/Marla conversion, carry addition and fractional share values
// ============================================================================
//
// Farrad is the atomic unit and is the same quantity as one Marla:
//   1 Kanal = 20 Marla = 20 Farrad
//
// Nothing here validates ranges. Negative inputs or a Marla of 20 and above are
// rejected by the calculator layer before these functions run.

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use super::rounding::round_decimal;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of Marla (Farrad) in one Kanal
pub const MARLA_PER_KANAL: i64 = 20;

/// Land amount expressed in Farrad (== Marla)
pub type Farrad = i64;

/// A land amount as a Kanal/Marla pair.
///
/// Every pair produced by [`add_kanal_marla`] has `0 <= marla < 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KanalMarla {
    pub kanal: i64,
    pub marla: i64,
}

impl KanalMarla {
    pub const fn new(kanal: i64, marla: i64) -> Self {
        Self { kanal, marla }
    }

    /// Total in Farrad (`kanal * 20 + marla`).
    #[inline]
    pub fn to_farrad(self) -> NumericResult<Farrad> {
        total_farrad(self.kanal, self.marla)
    }

    /// Split a Farrad amount back into Kanal and Marla.
    ///
    /// Uses euclidean division so the Marla part is always in `[0, 20)`.
    #[inline]
    pub fn from_farrad(total: Farrad) -> Self {
        Self {
            kanal: total.div_euclid(MARLA_PER_KANAL),
            marla: total.rem_euclid(MARLA_PER_KANAL),
        }
    }
}

impl fmt::Display for KanalMarla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Kanal, {} Marla", self.kanal, self.marla)
    }
}

/// `kanal * 20 + marla`.
///
/// # Errors
/// Returns `Overflow` if the total does not fit in an i64.
#[inline]
pub fn total_farrad(kanal: i64, marla: i64) -> NumericResult<Farrad> {
    kanal
        .checked_mul(MARLA_PER_KANAL)
        .and_then(|k| k.checked_add(marla))
        .ok_or(NumericError::Overflow)
}

/// Add two Kanal/Marla pairs, carrying every 20 Marla into one Kanal.
///
/// # Example
/// ```
/// use land_calculator::numeric::{add_kanal_marla, KanalMarla};
///
/// let sum = add_kanal_marla(KanalMarla::new(10, 15), KanalMarla::new(5, 10)).unwrap();
/// assert_eq!(sum, KanalMarla::new(16, 5));
/// ```
pub fn add_kanal_marla(first: KanalMarla, second: KanalMarla) -> NumericResult<KanalMarla> {
    let total_marla = first
        .marla
        .checked_add(second.marla)
        .ok_or(NumericError::Overflow)?;
    let carry = total_marla.div_euclid(MARLA_PER_KANAL);
    let remainder = total_marla.rem_euclid(MARLA_PER_KANAL);

    let kanal = first
        .kanal
        .checked_add(second.kanal)
        .and_then(|k| k.checked_add(carry))
        .ok_or(NumericError::Overflow)?;

    Ok(KanalMarla {
        kanal,
        marla: remainder,
    })
}

/// Value of a fractional share of `total` Farrad, rounded to `precision` digits.
///
/// Computed exactly in `Decimal` as `total * numerator / denominator` before
/// rounding.
///
/// # Errors
/// Returns `Overflow` if the intermediate product exceeds the `Decimal` range.
pub fn share_value(total: Farrad, share: Fraction, precision: u32) -> NumericResult<Decimal> {
    let scaled = Decimal::from(total)
        .checked_mul(Decimal::from(share.numerator()))
        .ok_or(NumericError::Overflow)?;
    let value = scaled
        .checked_div(Decimal::from(share.denominator()))
        .ok_or(NumericError::DivisionByZero)?;
    Ok(round_decimal(value, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_farrad() {
        assert_eq!(total_farrad(10, 5).unwrap(), 205);
        assert_eq!(total_farrad(0, 0).unwrap(), 0);
        assert_eq!(total_farrad(1, 25).unwrap(), 45);
        assert_eq!(total_farrad(i64::MAX, 0), Err(NumericError::Overflow));
    }

    #[test]
    fn test_add_with_carry() {
        let sum = add_kanal_marla(KanalMarla::new(10, 15), KanalMarla::new(5, 10)).unwrap();
        assert_eq!(sum, KanalMarla::new(16, 5));

        let exact = add_kanal_marla(KanalMarla::new(0, 10), KanalMarla::new(0, 10)).unwrap();
        assert_eq!(exact, KanalMarla::new(1, 0));

        let no_carry = add_kanal_marla(KanalMarla::new(2, 3), KanalMarla::new(4, 5)).unwrap();
        assert_eq!(no_carry, KanalMarla::new(6, 8));
    }

    #[test]
    fn test_add_result_marla_in_range() {
        for m1 in 0..20 {
            for m2 in 0..20 {
                let sum = add_kanal_marla(KanalMarla::new(1, m1), KanalMarla::new(1, m2)).unwrap();
                assert!((0..MARLA_PER_KANAL).contains(&sum.marla));
                assert_eq!(sum.to_farrad().unwrap(), 40 + m1 + m2);
            }
        }
    }

    #[test]
    fn test_from_farrad() {
        assert_eq!(KanalMarla::from_farrad(205), KanalMarla::new(10, 5));
        assert_eq!(KanalMarla::from_farrad(19), KanalMarla::new(0, 19));
    }

    #[test]
    fn test_share_value() {
        let share = Fraction::from_parts(3, 10).unwrap();
        assert_eq!(share_value(205, share, 4).unwrap(), Decimal::new(615, 1));

        let third = Fraction::from_parts(1, 3).unwrap();
        assert_eq!(share_value(100, third, 4).unwrap(), Decimal::new(333_333, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(KanalMarla::new(16, 5).to_string(), "16 Kanal, 5 Marla");
    }
}
