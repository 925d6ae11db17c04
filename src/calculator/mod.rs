// ============================================================================
// Calculator Module
// User-facing calculators built on the numeric core
// ============================================================================
//
// Each calculator validates domain ranges (negative land, Marla >= 20, zero
// total land, malformed fraction text) and only then calls into `numeric`.
// Calculators are values: operations that change entries return a new one.

mod errors;
mod fraction;
mod jamabandi;
mod land;
pub mod validation;

pub use errors::{CalculatorError, CalculatorResult, FractionInput, ValidationError};
pub use fraction::FractionCalculator;
pub use jamabandi::JamabandiCalculator;
pub use land::LandCalculator;

use crate::interfaces::{CalculationEvent, EventHandler};
use chrono::Utc;

/// Report a failed operation to the event handler, passing the result through.
fn observe<T>(handler: &dyn EventHandler, result: CalculatorResult<T>) -> CalculatorResult<T> {
    if let Err(err) = &result {
        handler.on_event(CalculationEvent::CalculationRejected {
            reason: err.to_string(),
            timestamp: Utc::now(),
        });
    }
    result
}
