// ============================================================================
// BigInt Backend
// Accelerated arithmetic over num-bigint-dig magnitudes
// ============================================================================

use crate::decimal::{Decimal, NumericError, NumericResult};
use crate::interfaces::ArithmeticBackend;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

/// Bignum-accelerated backend.
///
/// Each decimal becomes a `BigUint` magnitude plus an explicit sign and
/// scale; results are rendered back through the same canonicalization and
/// truncate-or-pad rounding as the longhand path, so both backends agree
/// digit for digit.
pub struct BigIntBackend;

impl ArithmeticBackend for BigIntBackend {
    fn name(&self) -> &str {
        "bigint"
    }

    fn add(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        let (ma, mb, scale) = at_common_scale(a, b);

        if a.is_negative() == b.is_negative() {
            return from_scaled(a.is_negative(), &(&ma + &mb), scale, precision);
        }

        // Mismatched signs: subtract the smaller magnitude, keep the larger
        // operand's sign
        match ma.cmp(&mb) {
            std::cmp::Ordering::Greater => {
                from_scaled(a.is_negative(), &(&ma - &mb), scale, precision)
            },
            _ => from_scaled(b.is_negative(), &(&mb - &ma), scale, precision),
        }
    }

    fn multiply(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        let product = magnitude(a) * magnitude(b);
        let negative = a.is_negative() != b.is_negative();
        from_scaled(negative, &product, a.scale() + b.scale(), precision)
    }

    fn divide(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        if a.is_zero() || b.is_zero() {
            return Decimal::zero();
        }

        // At a common scale the ratio is a plain integer division; the extra
        // 10^precision keeps exactly the fraction digits truncation needs
        let (ma, mb, _) = at_common_scale(a, b);
        let quotient = ma * pow10(precision) / mb;
        let negative = a.is_negative() != b.is_negative();
        from_scaled(negative, &quotient, precision, precision)
    }

    fn modulus(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        if a.is_zero() || b.is_zero() {
            return Decimal::zero();
        }

        let (ma, mb, scale) = at_common_scale(a, b);
        from_scaled(false, &(ma % mb), scale, precision)
    }

    fn power(
        &self,
        base: &Decimal,
        exponent: &Decimal,
        precision: usize,
    ) -> NumericResult<Decimal> {
        let exponent = exponent.round(0);
        if exponent.is_negative() {
            return Err(NumericError::UnsupportedOperation);
        }
        let count: usize = exponent
            .integer_digits()
            .parse()
            .map_err(|_| NumericError::UnsupportedOperation)?;

        let result = num_traits::pow(magnitude(base), count);
        let negative = base.is_negative() && count % 2 == 1;
        Ok(from_scaled(negative, &result, base.scale() * count, precision))
    }

    fn is_prime(&self, n: &Decimal) -> bool {
        if n.is_negative() || !n.is_integral() {
            return false;
        }
        let value = BigUint::parse_bytes(n.integer_digits().as_bytes(), 10)
            .expect("canonical digit string");
        if value.is_zero() || value.is_one() {
            return false;
        }
        num_bigint_dig::prime::probably_prime(&value, 20)
    }
}

// ============================================================================
// Scaled-Magnitude Conversions
// ============================================================================

/// Magnitude of a decimal as an integer at its own scale.
fn magnitude(d: &Decimal) -> BigUint {
    let digits = format!("{}{}", d.integer_digits(), d.fraction_digits());
    BigUint::parse_bytes(digits.as_bytes(), 10).expect("canonical digit string")
}

fn pow10(exp: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exp)
}

/// Both magnitudes brought to the wider of the two scales.
fn at_common_scale(a: &Decimal, b: &Decimal) -> (BigUint, BigUint, usize) {
    let scale = a.scale().max(b.scale());
    let ma = magnitude(a) * pow10(scale - a.scale());
    let mb = magnitude(b) * pow10(scale - b.scale());
    (ma, mb, scale)
}

/// Render a scaled magnitude back to a canonical decimal, through the same
/// rounding as the longhand path.
fn from_scaled(negative: bool, magnitude: &BigUint, scale: usize, precision: usize) -> Decimal {
    let digits = magnitude.to_str_radix(10);
    let (int_part, frac_part) = if digits.len() > scale {
        digits.split_at(digits.len() - scale)
    } else {
        ("", digits.as_str())
    };

    let mut frac = String::with_capacity(scale);
    for _ in 0..scale - frac_part.len() {
        frac.push('0');
    }
    frac.push_str(frac_part);

    Decimal::from_ascii_parts(negative, int_part, &frac, precision)
}
