// ============================================================================
// Longhand Backend
// The authoritative digit-string arithmetic implementation
// ============================================================================

use crate::decimal::{Decimal, NumericResult};
use crate::engine::{add_sub, divide, multiply, power, prime};
use crate::interfaces::ArithmeticBackend;

/// Pure digit-string arithmetic. Every other backend is measured against
/// this one.
pub struct LonghandBackend;

impl ArithmeticBackend for LonghandBackend {
    fn name(&self) -> &str {
        "longhand"
    }

    fn add(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        add_sub::add(a, b, precision)
    }

    fn multiply(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        multiply::multiply(a, b, precision)
    }

    fn divide(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        divide::divide(a, b, precision)
    }

    fn modulus(&self, a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
        divide::modulus(a, b, precision)
    }

    fn power(
        &self,
        base: &Decimal,
        exponent: &Decimal,
        precision: usize,
    ) -> NumericResult<Decimal> {
        power::power(base, exponent, precision)
    }

    fn is_prime(&self, n: &Decimal) -> bool {
        prime::is_prime(n)
    }
}
