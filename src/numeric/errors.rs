// ============================================================================
// Numeric Errors
// Error types for fraction and land-unit arithmetic
// ============================================================================

use std::fmt;

/// Errors raised by the arithmetic core.
///
/// Only mathematically undefined or unrepresentable operations end up here.
/// Range checks on land inputs (negative Kanal, Marla of 20 or more, zero total
/// land) belong to the calculator layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted to build or simplify a fraction with a zero denominator
    DivisionByZero,
    /// Intermediate or final result does not fit in an i64 / Decimal
    Overflow,
    /// Input string could not be read as a fraction
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "Denominator cannot be zero."),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
            NumericError::InvalidInput => {
                write!(f, "invalid input: expected a fraction of the form num/den")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
