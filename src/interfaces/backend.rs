// ============================================================================
// Arithmetic Backend Interface
// Defines the contract for pluggable arithmetic implementations
// ============================================================================

use crate::decimal::{Decimal, NumericResult};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy pattern interface for arithmetic backends.
/// Implementations: Longhand (digit strings), BigInt (accelerated).
///
/// The longhand digit-string algorithms are the authoritative contract:
/// every implementation must produce identical results for identical inputs,
/// normalized through the same truncate-or-pad rounding. `precision` is the
/// number of fraction digits of the result.
pub trait ArithmeticBackend: Send + Sync {
    /// Get the backend name for logging/metrics
    fn name(&self) -> &str;

    /// Add two decimals
    fn add(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal;

    /// Subtract `b` from `a`
    ///
    /// Default implementation: addition of the negation
    fn subtract(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        self.add(a, &b.negate(), precision)
    }

    /// Multiply two decimals
    fn multiply(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal;

    /// Divide `a` by `b`; either operand being zero yields zero
    fn divide(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal;

    /// Remainder of `a` divided by `b` on magnitudes; zero operands yield zero
    fn modulus(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal;

    /// Raise `base` to a whole-number `exponent`
    ///
    /// # Errors
    /// `UnsupportedOperation` for negative exponents
    fn power(&self, base: &Decimal, exponent: &Decimal, precision: usize)
        -> NumericResult<Decimal>;

    /// Check whether a non-negative integer-valued decimal is prime
    fn is_prime(&self, n: &Decimal) -> bool;

    /// Sign-aware three-way comparison
    ///
    /// Default implementation composes the value type's magnitude ordering
    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }
}

/// Selects which arithmetic backend a configured engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendKind {
    /// Authoritative digit-string algorithms
    Longhand,

    /// Bignum-accelerated adapter (requires the `accel` feature)
    Accelerated,
}

/// Configuration for a decimal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Number of fraction digits results are truncated or padded to
    pub precision: usize,

    /// Which arithmetic implementation to use
    pub backend: BackendKind,
}

impl EngineConfig {
    /// Builder method: set the result precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: set the backend
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: Decimal::DEFAULT_PRECISION,
            backend: BackendKind::Longhand,
        }
    }
}
