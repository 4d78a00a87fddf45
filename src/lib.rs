// ============================================================================
// Decimal Engine Library
// Arbitrary-precision base-10 arithmetic on digit strings
// ============================================================================

//! # Decimal Engine
//!
//! An exact, arbitrary-precision decimal arithmetic engine. Numbers are digit
//! strings, not machine floats, so money-like and very-large-number
//! computation carries no binary rounding error.
//!
//! ## Features
//!
//! - **Digit-string algorithms** for add/subtract/multiply/divide/modulus/
//!   power/compare/round, plus parsing and a primality test
//! - **Canonical immutable values** — every operation returns a new value
//! - **Truncate-or-pad rounding** to a per-call fraction precision
//! - **Pluggable backends**: the longhand algorithms are the authoritative
//!   contract; an optional `num-bigint-dig` adapter (`accel` feature) must
//!   reproduce them exactly
//! - **Pure functions throughout** — thread-safe without synchronization
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! let engine = DecimalEngine::longhand(2);
//!
//! let a = engine.parse("123.45").unwrap();
//! let b = engine.parse("67.5").unwrap();
//! assert_eq!(engine.add(&a, &b).to_string(), "190.95");
//!
//! // Scientific notation normalizes through the same arithmetic
//! assert_eq!(engine.parse("1.5e2").unwrap().to_string(), "150.00");
//!
//! // Division by zero is the documented fail-soft zero, not an error
//! let zero = engine.parse("0").unwrap();
//! assert_eq!(engine.divide(&a, &zero).to_string(), "0");
//! ```

pub mod decimal;
pub mod engine;
pub mod interfaces;

#[cfg(feature = "accel")]
pub mod accel;

// Re-exports for convenience
pub mod prelude {
    #[cfg(feature = "accel")]
    pub use crate::accel::BigIntBackend;
    pub use crate::decimal::{Decimal, NumericError, NumericResult};
    pub use crate::engine::{create_from_config, DecimalEngine, LonghandBackend};
    pub use crate::interfaces::{ArithmeticBackend, BackendKind, EngineConfig};
}

#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, Decimal::DEFAULT_PRECISION).unwrap()
    }

    #[test]
    fn test_end_to_end_scenarios() {
        let e2 = DecimalEngine::longhand(2);
        let e0 = DecimalEngine::longhand(0);

        assert_eq!(
            e2.add(&e2.parse("123.45").unwrap(), &e2.parse("67.5").unwrap())
                .to_string(),
            "190.95"
        );
        assert_eq!(
            e0.subtract(&e0.parse("100").unwrap(), &e0.parse("1").unwrap())
                .to_string(),
            "99"
        );
        assert_eq!(
            e2.multiply(&e2.parse("12.5").unwrap(), &e2.parse("4").unwrap())
                .to_string(),
            "50.00"
        );
        assert_eq!(
            e2.divide(&e2.parse("10").unwrap(), &e2.parse("4").unwrap())
                .to_string(),
            "2.50"
        );
        assert_eq!(
            e2.divide(&e2.parse("5").unwrap(), &e2.parse("0").unwrap())
                .to_string(),
            "0"
        );
        assert!(e2.is_prime(&e2.parse("17").unwrap()));
        assert!(!e2.is_prime(&e2.parse("18").unwrap()));
        assert_eq!(e2.parse("1.5e2").unwrap().to_string(), "150.00");
    }

    proptest! {
        #[test]
        fn prop_parse_display_round_trip(text in "[+-]?[0-9]{1,12}(\\.[0-9]{1,6})?") {
            let x = Decimal::parse(&text, 6).unwrap();
            let back = Decimal::parse(&x.to_string(), 6).unwrap();
            prop_assert_eq!(back, x);
        }

        #[test]
        fn prop_add_commutative(
            a in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?",
            b in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?",
        ) {
            let (a, b) = (dec(&a), dec(&b));
            let engine = DecimalEngine::default();
            prop_assert_eq!(engine.add(&a, &b), engine.add(&b, &a));
        }

        #[test]
        fn prop_multiply_commutative(
            a in "[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?",
            b in "[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?",
        ) {
            let (a, b) = (dec(&a), dec(&b));
            let engine = DecimalEngine::default();
            prop_assert_eq!(engine.multiply(&a, &b), engine.multiply(&b, &a));
        }

        #[test]
        fn prop_add_associative(
            a in "[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?",
            b in "[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?",
            c in "[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?",
        ) {
            // Fraction widths stay below the precision, so sums are exact
            let (a, b, c) = (dec(&a), dec(&b), dec(&c));
            let engine = DecimalEngine::default();
            prop_assert_eq!(
                engine.add(&engine.add(&a, &b), &c),
                engine.add(&a, &engine.add(&b, &c))
            );
        }

        #[test]
        fn prop_additive_inverse(a in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?") {
            let a = dec(&a);
            let engine = DecimalEngine::default();
            let negated = engine.subtract(&Decimal::zero(), &a);
            prop_assert!(engine.add(&a, &negated).is_zero());
        }

        #[test]
        fn prop_compare_totality(
            a in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?",
            b in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?",
        ) {
            let (a, b) = (dec(&a), dec(&b));
            let engine = DecimalEngine::default();
            prop_assert_eq!(engine.compare(&a, &a), Ordering::Equal);
            prop_assert_eq!(engine.compare(&a, &b), engine.compare(&b, &a).reverse());
        }

        #[test]
        fn prop_divide_multiply_consistency(
            a in "[+-]?[0-9]{1,6}(\\.[0-9]{1,4})?",
            b in "[+-]?[0-9]{1,3}(\\.[0-9]{1,2})?",
        ) {
            let (a, b) = (dec(&a), dec(&b));
            prop_assume!(!b.is_zero());

            let engine = DecimalEngine::default();
            let back = engine.multiply(&engine.divide(&a, &b), &b);

            // Two truncations at 14 fraction digits bound the error well
            // below 1e-7 for operands this size
            let error = DecimalEngine::longhand(16).subtract(&back, &a).abs();
            let tolerance = Decimal::parse("0.0000001", 16).unwrap();
            prop_assert!(error <= tolerance, "error {} for {} / {}", error, a, b);
        }
    }

    #[cfg(feature = "accel")]
    mod backend_equivalence {
        use super::*;

        proptest! {
            #[test]
            fn prop_backends_agree(
                a in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?",
                b in "[+-]?[0-9]{1,10}(\\.[0-9]{1,5})?",
            ) {
                let (a, b) = (dec(&a), dec(&b));
                let manual = LonghandBackend;
                let fast = BigIntBackend;

                prop_assert_eq!(
                    manual.add(&a, &b, 14).to_string(),
                    fast.add(&a, &b, 14).to_string()
                );
                prop_assert_eq!(
                    manual.subtract(&a, &b, 14).to_string(),
                    fast.subtract(&a, &b, 14).to_string()
                );
                prop_assert_eq!(
                    manual.multiply(&a, &b, 14).to_string(),
                    fast.multiply(&a, &b, 14).to_string()
                );
                prop_assert_eq!(
                    manual.divide(&a, &b, 14).to_string(),
                    fast.divide(&a, &b, 14).to_string()
                );
                prop_assert_eq!(
                    manual.modulus(&a, &b, 14).to_string(),
                    fast.modulus(&a, &b, 14).to_string()
                );
            }

            #[test]
            fn prop_backends_agree_on_power(
                base in "[+-]?[0-9]{1,4}(\\.[0-9]{1,3})?",
                exponent in 0u32..6,
            ) {
                let base = dec(&base);
                let exponent = dec(&exponent.to_string());
                prop_assert_eq!(
                    LonghandBackend.power(&base, &exponent, 14).unwrap().to_string(),
                    BigIntBackend.power(&base, &exponent, 14).unwrap().to_string()
                );
            }

            #[test]
            fn prop_backends_agree_on_primality(n in 0u32..200_000u32) {
                let n = dec(&n.to_string());
                prop_assert_eq!(
                    LonghandBackend.is_prime(&n),
                    BigIntBackend.is_prime(&n)
                );
            }
        }
    }
}
