// ============================================================================
// Domain Models Module
// Value objects owned by the calculators: entries, results, configuration
// ============================================================================

pub mod config;
pub mod entry;
pub mod operation;
pub mod share;

pub use config::CalculatorConfig;
pub use entry::EntryId;
pub use operation::{FractionOperator, OperationEntry, OperationResult};
pub use share::{JamabandiReport, ShareEntry, ShareValue};
