// ============================================================================
// Fraction Operation Domain Model
// ============================================================================

use super::{CalculatorConfig, EntryId};
use crate::numeric::{
    add_fractions, round_to_precision, subtract_fractions, Fraction, NumericError, NumericResult,
};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionOperator {
    Add,
    Subtract,
}

impl FractionOperator {
    pub fn symbol(&self) -> char {
        match self {
            FractionOperator::Add => '+',
            FractionOperator::Subtract => '-',
        }
    }

    /// Apply the operator; the result is canonical.
    pub fn apply(&self, lhs: Fraction, rhs: Fraction) -> NumericResult<Fraction> {
        match self {
            FractionOperator::Add => add_fractions(lhs, rhs),
            FractionOperator::Subtract => subtract_fractions(lhs, rhs),
        }
    }
}

impl fmt::Display for FractionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for FractionOperator {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(FractionOperator::Add),
            "-" => Ok(FractionOperator::Subtract),
            _ => Err(NumericError::InvalidInput),
        }
    }
}

/// Presentation of a fraction result: reduced fraction, rounded decimal and
/// a percentage string such as `"6.67%"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationResult {
    pub fraction: Fraction,
    pub decimal: f64,
    pub percentage: String,
}

impl OperationResult {
    pub fn from_fraction(fraction: Fraction, config: &CalculatorConfig) -> Self {
        let value = fraction.to_f64();
        let decimal = unsigned_zero(round_to_precision(value, config.decimal_precision));
        let percentage =
            unsigned_zero(round_to_precision(value * 100.0, config.percentage_precision));

        Self {
            fraction,
            decimal,
            percentage: format!("{}%", percentage),
        }
    }
}

/// Small negatives round to `-0.0`; show them as plain zero.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// One performed fraction operation, kept for history display
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationEntry {
    pub id: EntryId,
    pub first_text: String,
    pub second_text: String,
    pub operator: FractionOperator,
    pub result: OperationResult,
    pub created_at: DateTime<Utc>,
}

impl OperationEntry {
    pub fn new(
        first_text: impl Into<String>,
        operator: FractionOperator,
        second_text: impl Into<String>,
        result: OperationResult,
    ) -> Self {
        Self {
            id: EntryId::new(),
            first_text: first_text.into(),
            second_text: second_text.into(),
            operator,
            result,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for OperationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.first_text, self.operator, self.second_text, self.result.fraction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse_and_display() {
        assert_eq!("+".parse::<FractionOperator>().unwrap(), FractionOperator::Add);
        assert_eq!(" - ".parse::<FractionOperator>().unwrap(), FractionOperator::Subtract);
        assert_eq!("*".parse::<FractionOperator>(), Err(NumericError::InvalidInput));
        assert_eq!(FractionOperator::Subtract.to_string(), "-");
    }

    #[test]
    fn test_operator_apply() {
        let half = Fraction::from_parts(1, 2).unwrap();
        let third = Fraction::from_parts(1, 3).unwrap();
        assert_eq!(
            FractionOperator::Add.apply(half, third).unwrap(),
            Fraction::new(5, 6).unwrap()
        );
        assert_eq!(
            FractionOperator::Subtract.apply(half, third).unwrap(),
            Fraction::new(1, 6).unwrap()
        );
    }

    #[test]
    fn test_result_formatting() {
        let config = CalculatorConfig::default();
        let result = OperationResult::from_fraction(Fraction::new(1, 15).unwrap(), &config);
        assert_eq!(result.decimal, 0.0667);
        assert_eq!(result.percentage, "6.67%");

        let half = OperationResult::from_fraction(Fraction::new(1, 2).unwrap(), &config);
        assert_eq!(half.decimal, 0.5);
        assert_eq!(half.percentage, "50%");

        let negative = OperationResult::from_fraction(Fraction::new(-1, 4).unwrap(), &config);
        assert_eq!(negative.percentage, "-25%");
    }

    #[test]
    fn test_tiny_negative_rounds_to_plain_zero() {
        let config = CalculatorConfig::default();
        let result =
            OperationResult::from_fraction(Fraction::new(-1, 1_000_000).unwrap(), &config);
        assert_eq!(result.percentage, "0%");
        assert_eq!(result.decimal, 0.0);
        assert!(result.decimal.is_sign_positive());
    }

    #[test]
    fn test_entry_display() {
        let config = CalculatorConfig::default();
        let result = OperationResult::from_fraction(Fraction::new(2, 15).unwrap(), &config);
        let entry = OperationEntry::new("1/10", FractionOperator::Add, "1/30", result);
        assert_eq!(entry.to_string(), "1/10 + 1/30 = 2/15");
    }
}
