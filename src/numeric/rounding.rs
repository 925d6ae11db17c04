// ============================================================================
// Decimal Rounding
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `precision` decimal digits, ties away from zero.
///
/// `NaN` and infinities pass through unchanged.
///
/// # Example
/// ```
/// use land_calculator::numeric::round_to_precision;
///
/// assert_eq!(round_to_precision(0.066666, 4), 0.0667);
/// assert_eq!(round_to_precision(2.5, 0), 3.0);
/// ```
#[inline]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Decimal counterpart of [`round_to_precision`], used for land share values.
///
/// Precision above 28 (the `Decimal` scale limit) leaves the value as is.
#[inline]
pub fn round_decimal(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to_precision(0.066666, 4), 0.0667);
        assert_eq!(round_to_precision(2.5, 0), 3.0);
        assert_eq!(round_to_precision(-2.5, 0), -3.0);
        assert_eq!(round_to_precision(61.5, 4), 61.5);
        assert_eq!(round_to_precision(6.666666, 2), 6.67);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to_precision(f64::NAN, 4).is_nan());
        assert_eq!(round_to_precision(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to_precision(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round_decimal() {
        // 0.066666 -> 0.0667
        assert_eq!(
            round_decimal(Decimal::new(66_666, 6), 4),
            Decimal::new(667, 4)
        );
        // ties away from zero
        assert_eq!(round_decimal(Decimal::new(25, 1), 0), Decimal::from(3));
        assert_eq!(round_decimal(Decimal::new(-25, 1), 0), Decimal::from(-3));
        assert_eq!(round_decimal(Decimal::new(12345, 5), 4), Decimal::new(1235, 4));
    }
}
