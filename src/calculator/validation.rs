// ============================================================================
// Input Validation
// Text-to-number conversion and land range checks
// ============================================================================

use super::errors::{FractionInput, ValidationError};
use crate::numeric::{
    parse_fraction, parse_integer_prefix, Fraction, KanalMarla, MARLA_PER_KANAL,
};

/// Read a Kanal or Marla field from its leading integer.
///
/// A field with no leading integer (blank, `"abc"`) counts as zero, and
/// anything after the integer is ignored (`"2.5"` is 2).
pub fn parse_land_field(text: &str) -> i64 {
    parse_integer_prefix(text).unwrap_or(0)
}

/// Read a Kanal/Marla pair from its two text fields.
pub fn parse_land(kanal: &str, marla: &str) -> KanalMarla {
    KanalMarla::new(parse_land_field(kanal), parse_land_field(marla))
}

/// Parse fraction text, tagging a failure with the input it came from.
pub fn require_fraction(text: &str, input: FractionInput) -> Result<Fraction, ValidationError> {
    parse_fraction(text).ok_or(ValidationError::InvalidFraction { input })
}

/// Every Kanal and Marla value must be zero or more.
pub fn ensure_non_negative(amounts: &[KanalMarla]) -> Result<(), ValidationError> {
    if amounts.iter().any(|a| a.kanal < 0 || a.marla < 0) {
        return Err(ValidationError::NegativeLand);
    }
    Ok(())
}

/// Marla must be below 20 for addition inputs.
pub fn ensure_marla_in_range(amounts: &[KanalMarla]) -> Result<(), ValidationError> {
    if amounts.iter().any(|a| a.marla >= MARLA_PER_KANAL) {
        return Err(ValidationError::MarlaOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_is_zero() {
        assert_eq!(parse_land_field(""), 0);
        assert_eq!(parse_land_field("   "), 0);
        assert_eq!(parse_land_field(" 12 "), 12);
        assert_eq!(parse_land_field("-3"), -3);
    }

    #[test]
    fn test_field_reads_leading_integer() {
        assert_eq!(parse_land_field("2.5"), 2);
        assert_eq!(parse_land_field("7 marla"), 7);
        assert_eq!(parse_land_field("abc"), 0);
        assert_eq!(parse_land("x", "1.9"), KanalMarla::new(0, 1));
    }

    #[test]
    fn test_require_fraction() {
        assert_eq!(
            require_fraction("3/10", FractionInput::Share).unwrap(),
            Fraction::from_parts(3, 10).unwrap()
        );
        assert_eq!(
            require_fraction("3/0", FractionInput::Second),
            Err(ValidationError::InvalidFraction {
                input: FractionInput::Second
            })
        );
    }

    #[test]
    fn test_range_checks() {
        let ok = [KanalMarla::new(1, 19), KanalMarla::new(0, 0)];
        assert!(ensure_non_negative(&ok).is_ok());
        assert!(ensure_marla_in_range(&ok).is_ok());

        assert_eq!(
            ensure_non_negative(&[KanalMarla::new(-1, 0)]),
            Err(ValidationError::NegativeLand)
        );
        assert_eq!(
            ensure_marla_in_range(&[KanalMarla::new(1, 20)]),
            Err(ValidationError::MarlaOutOfRange)
        );
    }
}
