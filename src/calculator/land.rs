// ============================================================================
// Kanal/Marla Calculator
// Validated land totals and carry addition
// ============================================================================

use super::errors::CalculatorResult;
use super::observe;
use super::validation::{ensure_marla_in_range, ensure_non_negative, parse_land};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{add_kanal_marla, total_farrad, Farrad, KanalMarla};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Adds Kanal/Marla amounts and converts them to Farrad.
///
/// Rejects negative values first, then a Marla of 20 or more, and only then
/// hands the amounts to the arithmetic core.
#[derive(Clone)]
pub struct LandCalculator {
    event_handler: Arc<dyn EventHandler>,
}

impl LandCalculator {
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self { event_handler }
    }

    /// Sum of two amounts with every 20 Marla carried into one Kanal.
    ///
    /// # Example
    /// ```
    /// use land_calculator::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let calc = LandCalculator::new(Arc::new(NoOpEventHandler));
    /// let sum = calc.add(KanalMarla::new(10, 15), KanalMarla::new(5, 10)).unwrap();
    /// assert_eq!(sum.to_string(), "16 Kanal, 5 Marla");
    /// ```
    pub fn add(&self, first: KanalMarla, second: KanalMarla) -> CalculatorResult<KanalMarla> {
        observe(self.event_handler.as_ref(), self.try_add(first, second))
    }

    /// [`LandCalculator::add`] over raw text fields (`(kanal, marla)`).
    pub fn add_text(
        &self,
        first: (&str, &str),
        second: (&str, &str),
    ) -> CalculatorResult<KanalMarla> {
        self.add(parse_land(first.0, first.1), parse_land(second.0, second.1))
    }

    /// Total land in Farrad. Marla is not range-checked here.
    pub fn total_land(&self, land: KanalMarla) -> CalculatorResult<Farrad> {
        observe(self.event_handler.as_ref(), self.try_total(land))
    }

    fn try_add(&self, first: KanalMarla, second: KanalMarla) -> CalculatorResult<KanalMarla> {
        let amounts = [first, second];
        ensure_non_negative(&amounts)?;
        ensure_marla_in_range(&amounts)?;

        let result = add_kanal_marla(first, second)?;

        self.event_handler.on_event(CalculationEvent::LandAdded {
            first,
            second,
            result,
            timestamp: Utc::now(),
        });

        Ok(result)
    }

    fn try_total(&self, land: KanalMarla) -> CalculatorResult<Farrad> {
        ensure_non_negative(&[land])?;
        let total = total_farrad(land.kanal, land.marla)?;

        self.event_handler.on_event(CalculationEvent::TotalLandComputed {
            land,
            total,
            timestamp: Utc::now(),
        });

        Ok(total)
    }
}

impl fmt::Debug for LandCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LandCalculator").finish_non_exhaustive()
    }
}
