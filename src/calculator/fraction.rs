// ============================================================================
// Fraction Calculator
// Addition/subtraction of user-entered fractions with a result history
// ============================================================================

use super::errors::{CalculatorResult, FractionInput, ValidationError};
use super::observe;
use super::validation::require_fraction;
use crate::domain::{
    CalculatorConfig, EntryId, FractionOperator, OperationEntry, OperationResult,
};
use crate::interfaces::{CalculationEvent, EventHandler};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Immutable history of fraction operations, newest first.
#[derive(Clone)]
pub struct FractionCalculator {
    config: CalculatorConfig,
    operations: Vec<OperationEntry>,
    event_handler: Arc<dyn EventHandler>,
}

impl FractionCalculator {
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config: CalculatorConfig::default(),
            operations: Vec::new(),
            event_handler,
        }
    }

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

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Performed operations, newest first
    pub fn operations(&self) -> &[OperationEntry] {
        &self.operations
    }

    pub fn latest(&self) -> Option<&OperationEntry> {
        self.operations.first()
    }

    /// Compute `first <operator> second` without recording it.
    pub fn evaluate(
        &self,
        first_text: &str,
        operator: FractionOperator,
        second_text: &str,
    ) -> CalculatorResult<OperationResult> {
        observe(
            self.event_handler.as_ref(),
            self.try_evaluate(first_text, operator, second_text),
        )
    }

    /// Compute `first <operator> second` and put it at the top of the history.
    ///
    /// # Example
    /// ```
    /// use land_calculator::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let calc = FractionCalculator::new(Arc::new(NoOpEventHandler))
    ///     .apply("1/10", FractionOperator::Add, "1/30")
    ///     .unwrap();
    ///
    /// let result = &calc.latest().unwrap().result;
    /// assert_eq!(result.fraction.to_string(), "2/15");
    /// assert_eq!(result.percentage, "13.33%");
    /// ```
    pub fn apply(
        &self,
        first_text: &str,
        operator: FractionOperator,
        second_text: &str,
    ) -> CalculatorResult<Self> {
        let result = self.evaluate(first_text, operator, second_text)?;
        let entry = OperationEntry::new(first_text.trim(), operator, second_text.trim(), result);

        self.event_handler
            .on_event(CalculationEvent::FractionOperationApplied {
                id: entry.id,
                operator,
                result: entry.result.fraction,
                timestamp: entry.created_at,
            });

        let mut operations = Vec::with_capacity(self.operations.len() + 1);
        operations.push(entry);
        operations.extend(self.operations.iter().cloned());

        Ok(Self {
            operations,
            ..self.clone()
        })
    }

    /// Drop an operation from the history.
    pub fn remove(&self, id: EntryId) -> CalculatorResult<Self> {
        if !self.operations.iter().any(|op| op.id == id) {
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
            operations: self
                .operations
                .iter()
                .filter(|op| op.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        })
    }

    fn try_evaluate(
        &self,
        first_text: &str,
        operator: FractionOperator,
        second_text: &str,
    ) -> CalculatorResult<OperationResult> {
        let first = require_fraction(first_text, FractionInput::First)?;
        let second = require_fraction(second_text, FractionInput::Second)?;
        let fraction = operator.apply(first, second)?;
        Ok(OperationResult::from_fraction(fraction, &self.config))
    }
}

impl fmt::Debug for FractionCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FractionCalculator")
            .field("config", &self.config)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}
