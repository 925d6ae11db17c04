// ============================================================================
// Jamabandi Calculator
// Fractional shares of a total land amount
// ============================================================================

use super::errors::{CalculatorResult, FractionInput, ValidationError};
use super::observe;
use super::validation::{ensure_non_negative, parse_land, require_fraction};
use crate::domain::{CalculatorConfig, EntryId, JamabandiReport, ShareEntry, ShareValue};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{round_decimal, share_value, total_farrad, Farrad, KanalMarla, NumericError};
use chrono::Utc;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Immutable Jamabandi worksheet: a land amount plus a list of shares.
///
/// Every mutating operation returns a new calculator and leaves `self`
/// untouched, so callers can keep earlier states around (undo, history).
///
/// # Example
/// ```
/// use land_calculator::prelude::*;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let report = JamabandiCalculator::new(Arc::new(NoOpEventHandler))
///     .with_land(KanalMarla::new(10, 5))
///     .add_share("3/10")
///     .unwrap()
///     .calculate()
///     .unwrap();
///
/// assert_eq!(report.total_land, 205);
/// assert_eq!(report.shares[0].value, Decimal::new(615, 1));
/// ```
#[derive(Clone)]
pub struct JamabandiCalculator {
    config: CalculatorConfig,
    land: KanalMarla,
    shares: Vec<ShareEntry>,
    event_handler: Arc<dyn EventHandler>,
}

impl JamabandiCalculator {
    /// Empty worksheet with the default precisions
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config: CalculatorConfig::default(),
            land: KanalMarla::default(),
            shares: Vec::new(),
            event_handler,
        }
    }

    /// Empty worksheet with explicit precisions
    pub fn with_config(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(event_handler)
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn land(&self) -> KanalMarla {
        self.land
    }

    pub fn shares(&self) -> &[ShareEntry] {
        &self.shares
    }

    // ========================================================================
    // Land
    // ========================================================================

    /// Replace the land amount. Checked when the total is computed.
    pub fn with_land(&self, land: KanalMarla) -> Self {
        Self {
            land,
            ..self.clone()
        }
    }

    /// Replace the land amount from Kanal/Marla text.
    ///
    /// Each field is read from its leading integer; a field without one is zero.
    pub fn with_land_text(&self, kanal: &str, marla: &str) -> Self {
        self.with_land(parse_land(kanal, marla))
    }

    /// Total land in Farrad (`kanal * 20 + marla`).
    pub fn total_land(&self) -> CalculatorResult<Farrad> {
        observe(self.event_handler.as_ref(), self.try_total_land())
    }

    fn try_total_land(&self) -> CalculatorResult<Farrad> {
        ensure_non_negative(&[self.land])?;
        let total = total_farrad(self.land.kanal, self.land.marla)?;

        self.event_handler.on_event(CalculationEvent::TotalLandComputed {
            land: self.land,
            total,
            timestamp: Utc::now(),
        });

        Ok(total)
    }

    // ========================================================================
    // Shares
    // ========================================================================

    /// Register a share given as `"num/den"` text.
    pub fn add_share(&self, fraction_text: &str) -> CalculatorResult<Self> {
        let fraction = observe(
            self.event_handler.as_ref(),
            require_fraction(fraction_text, FractionInput::Share).map_err(Into::into),
        )?;

        let entry = ShareEntry::new(fraction_text.trim(), fraction);
        self.event_handler.on_event(CalculationEvent::ShareAdded {
            id: entry.id,
            fraction,
            timestamp: entry.created_at,
        });

        let mut shares = self.shares.clone();
        shares.push(entry);
        Ok(Self {
            shares,
            ..self.clone()
        })
    }

    /// Drop a share by id.
    pub fn remove_share(&self, id: EntryId) -> CalculatorResult<Self> {
        if !self.shares.iter().any(|s| s.id == id) {
            return observe(
                self.event_handler.as_ref(),
                Err(ValidationError::UnknownEntry(id).into()),
            );
        }

        self.event_handler.on_event(CalculationEvent::EntryRemoved {
            id,
            timestamp: Utc::now(),
        });

        Ok(Self {
            shares: self.shares.iter().filter(|s| s.id != id).cloned().collect(),
            ..self.clone()
        })
    }

    // ========================================================================
    // Calculation
    // ========================================================================

    /// Value of every share, their sum and the sum/total ratio.
    ///
    /// # Errors
    /// - `NegativeLand` if Kanal or Marla is below zero
    /// - `ZeroTotalLand` if the land amount is zero
    /// - `Overflow` if a share value leaves the `Decimal` range
    pub fn calculate(&self) -> CalculatorResult<JamabandiReport> {
        observe(self.event_handler.as_ref(), self.try_calculate())
    }

    fn try_calculate(&self) -> CalculatorResult<JamabandiReport> {
        let total = self.try_total_land()?;
        if total == 0 {
            return Err(ValidationError::ZeroTotalLand.into());
        }

        let precision = self.config.share_precision;
        let mut sum = Decimal::ZERO;
        let mut shares = Vec::with_capacity(self.shares.len());

        for entry in &self.shares {
            let value = share_value(total, entry.fraction, precision)?;
            sum = sum.checked_add(value).ok_or(NumericError::Overflow)?;
            shares.push(ShareValue {
                id: entry.id,
                fraction: entry.fraction,
                value,
            });
        }

        let ratio = sum
            .checked_div(Decimal::from(total))
            .ok_or(NumericError::Overflow)?;

        let report = JamabandiReport {
            total_land: total,
            shares,
            sum_of_shares: round_decimal(sum, precision),
            final_ratio: round_decimal(ratio, self.config.ratio_precision),
        };

        self.event_handler.on_event(CalculationEvent::SharesCalculated {
            total_land: report.total_land,
            share_count: report.shares.len(),
            sum_of_shares: report.sum_of_shares,
            final_ratio: report.final_ratio,
            timestamp: Utc::now(),
        });

        Ok(report)
    }
}

impl fmt::Debug for JamabandiCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JamabandiCalculator")
            .field("config", &self.config)
            .field("land", &self.land)
            .field("shares", &self.shares)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalculatorError;
    use crate::interfaces::NoOpEventHandler;

    fn calculator() -> JamabandiCalculator {
        JamabandiCalculator::new(Arc::new(NoOpEventHandler))
    }

    #[test]
    fn test_total_land() {
        let calc = calculator().with_land(KanalMarla::new(10, 5));
        assert_eq!(calc.total_land().unwrap(), 205);

        let blank_marla = calculator().with_land_text("10", "");
        assert_eq!(blank_marla.total_land().unwrap(), 200);

        let lenient = calculator().with_land_text("10.9", "5 marla");
        assert_eq!(lenient.total_land().unwrap(), 205);
    }

    #[test]
    fn test_negative_land_rejected() {
        let calc = calculator().with_land(KanalMarla::new(-1, 5));
        assert_eq!(
            calc.total_land().unwrap_err(),
            CalculatorError::Validation(ValidationError::NegativeLand)
        );
    }

    #[test]
    fn test_add_share_is_non_destructive() {
        let empty = calculator();
        let one = empty.add_share("3/10").unwrap();
        assert!(empty.shares().is_empty());
        assert_eq!(one.shares().len(), 1);
        assert_eq!(one.shares()[0].fraction_text, "3/10");
    }

    #[test]
    fn test_invalid_share_rejected() {
        for text in ["abc", "1/0", "1/2/3", ""] {
            let err = calculator().add_share(text).unwrap_err();
            assert_eq!(
                err,
                CalculatorError::Validation(ValidationError::InvalidFraction {
                    input: FractionInput::Share
                })
            );
        }
    }

    #[test]
    fn test_remove_share() {
        let calc = calculator().add_share("1/2").unwrap().add_share("1/4").unwrap();
        let id = calc.shares()[0].id;

        let removed = calc.remove_share(id).unwrap();
        assert_eq!(removed.shares().len(), 1);
        assert_eq!(removed.shares()[0].fraction_text, "1/4");

        assert_eq!(
            removed.remove_share(id).unwrap_err(),
            CalculatorError::Validation(ValidationError::UnknownEntry(id))
        );
    }

    #[test]
    fn test_calculate_single_share() {
        let report = calculator()
            .with_land(KanalMarla::new(10, 5))
            .add_share("3/10")
            .unwrap()
            .calculate()
            .unwrap();

        assert_eq!(report.total_land, 205);
        assert_eq!(report.shares.len(), 1);
        assert_eq!(report.shares[0].value, Decimal::new(615, 1));
        assert_eq!(report.sum_of_shares, Decimal::new(615, 1));
        assert_eq!(report.final_ratio, Decimal::new(3, 1));
    }

    #[test]
    fn test_calculate_full_allocation() {
        let report = calculator()
            .with_land(KanalMarla::new(1, 0))
            .add_share("1/2")
            .unwrap()
            .add_share("1/4")
            .unwrap()
            .add_share("2/8")
            .unwrap()
            .calculate()
            .unwrap();

        assert_eq!(report.sum_of_shares, Decimal::from(20));
        assert!(report.is_fully_allocated());
    }

    #[test]
    fn test_calculate_rounding() {
        let report = calculator()
            .with_land(KanalMarla::new(0, 10))
            .add_share("1/3")
            .unwrap()
            .add_share("1/3")
            .unwrap()
            .calculate()
            .unwrap();

        // 3.3333 + 3.3333 over 10 Farrad
        assert_eq!(report.shares[0].value, Decimal::new(33_333, 4));
        assert_eq!(report.sum_of_shares, Decimal::new(66_666, 4));
        assert_eq!(report.final_ratio, Decimal::new(666_660, 6));
    }

    #[test]
    fn test_zero_land_rejected() {
        let err = calculator().add_share("1/2").unwrap().calculate().unwrap_err();
        assert_eq!(
            err,
            CalculatorError::Validation(ValidationError::ZeroTotalLand)
        );
    }

    #[test]
    fn test_custom_precision() {
        let config = CalculatorConfig::default().with_share_precision(1);
        let report = JamabandiCalculator::with_config(config, Arc::new(NoOpEventHandler))
            .unwrap()
            .with_land(KanalMarla::new(0, 10))
            .add_share("1/3")
            .unwrap()
            .calculate()
            .unwrap();
        assert_eq!(report.shares[0].value, Decimal::new(33, 1));

        let bad = CalculatorConfig::default().with_share_precision(40);
        assert!(JamabandiCalculator::with_config(bad, Arc::new(NoOpEventHandler)).is_err());
    }
}
