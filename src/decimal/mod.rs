// ============================================================================
// Decimal Module
// Canonical decimal value type and error definitions
// ============================================================================
//
// This module provides:
// - Decimal: immutable arbitrary-precision decimal backed by digit strings
// - NumericError: error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations anywhere
// - Canonical form: no insignificant leading/trailing zeros, zero is positive
// - Values never mutate; every operation returns a new value

mod errors;
mod value;

pub use errors::{NumericError, NumericResult};
pub use value::Decimal;
