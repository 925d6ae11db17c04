// ============================================================================
// Calculator Configuration
// Rounding precisions used when presenting share values and fraction results
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `rust_decimal::Decimal` can carry
pub const MAX_PRECISION: u32 = 28;

/// Rounding configuration shared by the calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Decimal digits kept for each share value and for their sum (Farrad)
    pub share_precision: u32,

    /// Decimal digits kept for the sum-of-shares / total-land ratio
    pub ratio_precision: u32,

    /// Decimal digits kept for the decimal value of a fraction result
    pub decimal_precision: u32,

    /// Decimal digits kept for the percentage of a fraction result
    pub percentage_precision: u32,
}

impl CalculatorConfig {
    /// Create a configuration with explicit precisions
    pub fn new(
        share_precision: u32,
        ratio_precision: u32,
        decimal_precision: u32,
        percentage_precision: u32,
    ) -> Self {
        Self {
            share_precision,
            ratio_precision,
            decimal_precision,
            percentage_precision,
        }
    }

    /// Builder method: Set share value precision
    pub fn with_share_precision(mut self, precision: u32) -> Self {
        self.share_precision = precision;
        self
    }

    /// Builder method: Set final ratio precision
    pub fn with_ratio_precision(mut self, precision: u32) -> Self {
        self.ratio_precision = precision;
        self
    }

    /// Builder method: Set fraction decimal precision
    pub fn with_decimal_precision(mut self, precision: u32) -> Self {
        self.decimal_precision = precision;
        self
    }

    /// Builder method: Set percentage precision
    pub fn with_percentage_precision(mut self, precision: u32) -> Self {
        self.percentage_precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("Share", self.share_precision),
            ("Ratio", self.ratio_precision),
            ("Decimal", self.decimal_precision),
            ("Percentage", self.percentage_precision),
        ];

        for (name, precision) in fields {
            if precision > MAX_PRECISION {
                return Err(format!(
                    "{} precision cannot exceed {} digits",
                    name, MAX_PRECISION
                ));
            }
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    /// Share values to 4 digits, ratio to 6, fraction decimal to 4,
    /// percentage to 2.
    fn default() -> Self {
        Self::new(4, 6, 4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precisions() {
        let config = CalculatorConfig::default();
        assert_eq!(config.share_precision, 4);
        assert_eq!(config.ratio_precision, 6);
        assert_eq!(config.decimal_precision, 4);
        assert_eq!(config.percentage_precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::default()
            .with_share_precision(2)
            .with_ratio_precision(3)
            .with_decimal_precision(5)
            .with_percentage_precision(1);

        assert_eq!(config, CalculatorConfig::new(2, 3, 5, 1));
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig::default().with_ratio_precision(29);
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("Ratio precision"));

        assert!(CalculatorConfig::default()
            .with_share_precision(MAX_PRECISION)
            .validate()
            .is_ok());
    }
}
