// ============================================================================
// Numeric Module
// Pure arithmetic for fractions and Kanal/Marla land units
// ============================================================================
//
// This module provides:
// - Fraction: immutable integer fraction with gcd reduction
// - parse/simplify/add/subtract on fractions
// - round_to_precision / round_decimal
// - KanalMarla unit conversion, carry addition and share values
// - NumericError: errors for undefined or unrepresentable results
//
// Design principles:
// - Stateless, deterministic functions only
// - Parsing signals failure with None; arithmetic returns Result (no panics)
// - No domain range checks (those belong to the calculator layer)

mod errors;
mod fraction;
mod rounding;
mod units;

pub use errors::{NumericError, NumericResult};
pub use fraction::{
    add_fractions, gcd, parse_fraction, parse_integer_prefix, simplify_fraction,
    subtract_fractions, Fraction,
};
pub use rounding::{round_decimal, round_to_precision};
pub use units::{
    add_kanal_marla, share_value, total_farrad, Farrad, KanalMarla, MARLA_PER_KANAL,
};
