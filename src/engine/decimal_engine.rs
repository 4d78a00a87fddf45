// ============================================================================
// Decimal Engine
// Facade binding a backend to a configured precision
// ============================================================================

use crate::decimal::{Decimal, NumericResult};
use crate::engine::longhand::LonghandBackend;
use crate::interfaces::ArithmeticBackend;
use std::cmp::Ordering;

/// Arithmetic facade: one backend plus the precision applied to every
/// result.
///
/// The engine owns no other state; all operations are pure and safe to call
/// concurrently through a shared reference.
///
/// # Example
/// ```ignore
/// use decimal_engine::prelude::*;
///
/// let engine = DecimalEngine::longhand(2);
/// let a = engine.parse("123.45")?;
/// let b = engine.parse("67.5")?;
/// assert_eq!(engine.add(&a, &b).to_string(), "190.95");
/// ```
pub struct DecimalEngine {
    backend: Box<dyn ArithmeticBackend>,
    precision: usize,
}

impl DecimalEngine {
    /// Create an engine from a backend and a result precision.
    pub fn new(backend: Box<dyn ArithmeticBackend>, precision: usize) -> Self {
        tracing::debug!(
            "Decimal engine created: backend={}, precision={}",
            backend.name(),
            precision
        );
        Self { backend, precision }
    }

    /// Longhand engine at the given precision.
    pub fn longhand(precision: usize) -> Self {
        Self::new(Box::new(LonghandBackend), precision)
    }

    /// The configured result precision.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Name of the active backend.
    #[inline]
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Parse text at the engine's precision.
    ///
    /// # Errors
    /// `InvalidFormat` if the text matches neither the plain decimal nor the
    /// scientific grammar.
    pub fn parse(&self, text: &str) -> NumericResult<Decimal> {
        Decimal::parse(text, self.precision)
    }

    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.backend.add(a, b, self.precision)
    }

    pub fn subtract(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.backend.subtract(a, b, self.precision)
    }

    pub fn multiply(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.backend.multiply(a, b, self.precision)
    }

    /// Divide `a` by `b`. Either operand being zero yields zero — the
    /// engine's documented fail-soft policy, not an error.
    pub fn divide(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.backend.divide(a, b, self.precision)
    }

    /// Non-negative remainder of the magnitudes, at the engine's precision.
    pub fn modulus(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.backend.modulus(a, b, self.precision)
    }

    /// Raise `base` to a whole-number `exponent`.
    ///
    /// # Errors
    /// `UnsupportedOperation` for negative exponents.
    pub fn power(&self, base: &Decimal, exponent: &Decimal) -> NumericResult<Decimal> {
        self.backend.power(base, exponent, self.precision)
    }

    /// Sign-aware three-way comparison.
    pub fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        self.backend.compare(a, b)
    }

    /// Truncate or zero-pad to the engine's precision.
    pub fn round(&self, n: &Decimal) -> Decimal {
        n.round(self.precision)
    }

    /// Primality of a non-negative integer-valued decimal.
    pub fn is_prime(&self, n: &Decimal) -> bool {
        self.backend.is_prime(n)
    }
}

impl Default for DecimalEngine {
    fn default() -> Self {
        Self::longhand(Decimal::DEFAULT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(precision: usize) -> DecimalEngine {
        DecimalEngine::longhand(precision)
    }

    #[test]
    fn test_engine_scenarios() {
        let e2 = engine(2);
        let parse = |s: &str| e2.parse(s).unwrap();

        assert_eq!(e2.add(&parse("123.45"), &parse("67.5")).to_string(), "190.95");
        assert_eq!(e2.multiply(&parse("12.5"), &parse("4")).to_string(), "50.00");
        assert_eq!(e2.divide(&parse("10"), &parse("4")).to_string(), "2.50");
        assert_eq!(e2.divide(&parse("5"), &parse("0")).to_string(), "0");
        assert_eq!(e2.parse("1.5e2").unwrap().to_string(), "150.00");

        let e0 = engine(0);
        assert_eq!(
            e0.subtract(&e0.parse("100").unwrap(), &e0.parse("1").unwrap())
                .to_string(),
            "99"
        );
    }

    #[test]
    fn test_engine_primality() {
        let e = DecimalEngine::default();
        assert!(e.is_prime(&e.parse("17").unwrap()));
        assert!(!e.is_prime(&e.parse("18").unwrap()));
    }

    #[test]
    fn test_engine_round_and_compare() {
        let e = engine(3);
        let x = e.parse("1.23456").unwrap();
        assert_eq!(x.to_string(), "1.234");
        assert_eq!(e.round(&Decimal::one()).to_string(), "1.000");
        assert_eq!(
            e.compare(&e.parse("2").unwrap(), &e.parse("2.000").unwrap()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecimalEngine>();
    }
}
