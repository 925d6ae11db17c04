// ============================================================================
// Calculator Errors
// User-facing validation failures and wrapped arithmetic errors
// ============================================================================

use crate::domain::EntryId;
use crate::numeric::NumericError;
use std::fmt;

/// Which fraction input failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractionInput {
    /// Jamabandi share fraction
    Share,
    /// Left operand of a fraction operation
    First,
    /// Right operand of a fraction operation
    Second,
}

/// Domain checks performed before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Kanal or Marla below zero
    NegativeLand,
    /// Marla of 20 or more given to Kanal/Marla addition
    MarlaOutOfRange,
    /// Shares requested on zero total land
    ZeroTotalLand,
    /// Fraction text not of the form num/den, or zero denominator
    InvalidFraction { input: FractionInput },
    /// No entry with this id
    UnknownEntry(EntryId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NegativeLand => write!(f, "Kanal and Marla must be non-negative."),
            ValidationError::MarlaOutOfRange => write!(
                f,
                "Marla value cannot be 20 or more. It should be converted to Kanal."
            ),
            ValidationError::ZeroTotalLand => {
                write!(f, "Total land (Marla) is zero, cannot calculate shares.")
            },
            ValidationError::InvalidFraction { input } => match input {
                FractionInput::Share => write!(
                    f,
                    "Invalid fraction format. Use num/den (e.g., 3/10). Denominator cannot be zero."
                ),
                FractionInput::First => {
                    write!(f, "First fraction is invalid. Use num/den format.")
                },
                FractionInput::Second => {
                    write!(f, "Second fraction is invalid. Use num/den format.")
                },
            },
            ValidationError::UnknownEntry(id) => write!(f, "No entry with id {}.", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error returned by every calculator operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Input rejected by a domain check
    Validation(ValidationError),
    /// Arithmetic failed (overflow, zero denominator)
    Arithmetic(NumericError),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::Validation(err) => fmt::Display::fmt(err, f),
            CalculatorError::Arithmetic(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for CalculatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculatorError::Validation(err) => Some(err),
            CalculatorError::Arithmetic(err) => Some(err),
        }
    }
}

impl From<ValidationError> for CalculatorError {
    fn from(err: ValidationError) -> Self {
        CalculatorError::Validation(err)
    }
}

impl From<NumericError> for CalculatorError {
    fn from(err: NumericError) -> Self {
        CalculatorError::Arithmetic(err)
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            ValidationError::NegativeLand.to_string(),
            ValidationError::MarlaOutOfRange.to_string(),
            ValidationError::ZeroTotalLand.to_string(),
            ValidationError::InvalidFraction {
                input: FractionInput::Share,
            }
            .to_string(),
            ValidationError::InvalidFraction {
                input: FractionInput::First,
            }
            .to_string(),
            ValidationError::InvalidFraction {
                input: FractionInput::Second,
            }
            .to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_conversions() {
        let err: CalculatorError = NumericError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Denominator cannot be zero.");

        let err: CalculatorError = ValidationError::NegativeLand.into();
        assert!(matches!(
            err,
            CalculatorError::Validation(ValidationError::NegativeLand)
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
