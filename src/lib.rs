// ============================================================================
// Land Calculator Library
// Kanal/Marla arithmetic, exact fractions and Jamabandi share calculation
// ============================================================================

//! # Land Calculator
//!
//! Arithmetic for traditional land records: Kanal/Marla amounts, exact
//! fractions and proportional ("Jamabandi") shares of a total land amount.
//!
//! ## Features
//!
//! - **Exact fractions** reduced by gcd, always emitted in canonical form
//! - **Kanal/Marla addition** with automatic carry (1 Kanal = 20 Marla)
//! - **Share values** computed in `Decimal` and rounded half away from zero
//! - **Two-tier errors**: parsing returns `None`, arithmetic returns `Result`,
//!   range checks live in the calculators
//! - **Event hooks** for logging or auditing every calculation
//!
//! ## Example
//!
//! ```rust
//! use land_calculator::prelude::*;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! // 10 Kanal 5 Marla = 205 Farrad
//! let worksheet = JamabandiCalculator::new(Arc::new(NoOpEventHandler))
//!     .with_land(KanalMarla::new(10, 5))
//!     .add_share("3/10")
//!     .unwrap();
//!
//! let report = worksheet.calculate().unwrap();
//! assert_eq!(report.total_land, 205);
//! assert_eq!(report.shares[0].value, Decimal::new(615, 1)); // 61.5 Farrad
//!
//! // Plain fraction arithmetic
//! let a = parse_fraction("1/10").unwrap();
//! let b = parse_fraction("1/30").unwrap();
//! assert_eq!(add_fractions(a, b).unwrap().to_string(), "2/15");
//! ```

pub mod calculator;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{
        CalculatorError, CalculatorResult, FractionCalculator, FractionInput,
        JamabandiCalculator, LandCalculator, ValidationError,
    };
    pub use crate::domain::{
        CalculatorConfig, EntryId, FractionOperator, JamabandiReport, OperationEntry,
        OperationResult, ShareEntry, ShareValue,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{
        add_fractions, add_kanal_marla, parse_fraction, round_to_precision, simplify_fraction,
        subtract_fractions, total_farrad, Farrad, Fraction, KanalMarla, NumericError,
        NumericResult,
    };
}
