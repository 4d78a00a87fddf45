// ============================================================================
// Power
// Integer exponentiation by repeated multiplication
// ============================================================================

use crate::decimal::{Decimal, NumericError, NumericResult};
use crate::engine::align::{magnitude_digits, DigitBuf};
use crate::engine::multiply::mul_magnitudes;
use smallvec::smallvec;

/// Raise `base` to `exponent`, truncating/padding the result to `precision`
/// fraction digits.
///
/// The exponent is truncated to a whole number first. The magnitude
/// accumulates exactly, one multiplication per unit of the exponent, and is
/// rounded once at the end; the sign follows the base for odd exponents.
///
/// # Errors
/// Returns `UnsupportedOperation` for a negative exponent, or one too large
/// to count down from.
pub(crate) fn power(base: &Decimal, exponent: &Decimal, precision: usize) -> NumericResult<Decimal> {
    let exponent = exponent.round(0);
    if exponent.is_negative() {
        return Err(NumericError::UnsupportedOperation);
    }
    let count: u64 = exponent
        .integer_digits()
        .parse()
        .map_err(|_| NumericError::UnsupportedOperation)?;

    let (base_digits, base_frac) = magnitude_digits(base);
    let mut digits: DigitBuf = smallvec![1];
    let mut frac_len = 0;
    for _ in 0..count {
        digits = mul_magnitudes(&digits, &base_digits);
        frac_len += base_frac;
    }

    let negative = base.is_negative() && count % 2 == 1;
    Ok(Decimal::from_aligned_digits(negative, &digits, frac_len, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, s.split('.').nth(1).map_or(0, str::len)).unwrap()
    }

    #[test]
    fn test_power_basic() {
        assert_eq!(power(&dec("2"), &dec("10"), 0).unwrap().to_string(), "1024");
        assert_eq!(power(&dec("10"), &dec("2"), 0).unwrap().to_string(), "100");
        assert_eq!(power(&dec("5"), &dec("1"), 0).unwrap().to_string(), "5");
    }

    #[test]
    fn test_power_zero_exponent() {
        assert_eq!(power(&dec("7"), &dec("0"), 0).unwrap().to_string(), "1");
        // 0^0 follows the accumulator's seed
        assert_eq!(power(&dec("0"), &dec("0"), 0).unwrap().to_string(), "1");
    }

    #[test]
    fn test_power_zero_base() {
        assert_eq!(power(&dec("0"), &dec("5"), 2).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_power_fractional_base() {
        assert_eq!(power(&dec("1.5"), &dec("2"), 2).unwrap().to_string(), "2.25");
        assert_eq!(power(&dec("0.5"), &dec("3"), 3).unwrap().to_string(), "0.125");
    }

    #[test]
    fn test_power_negative_base_sign() {
        assert_eq!(power(&dec("-2"), &dec("3"), 0).unwrap().to_string(), "-8");
        assert_eq!(power(&dec("-2"), &dec("4"), 0).unwrap().to_string(), "16");
    }

    #[test]
    fn test_power_exponent_truncated_to_integer() {
        // 2^2.9 runs as 2^2
        assert_eq!(power(&dec("2"), &dec("2.9"), 0).unwrap().to_string(), "4");
    }

    #[test]
    fn test_power_negative_exponent_unsupported() {
        assert_eq!(
            power(&dec("2"), &dec("-1"), 0),
            Err(NumericError::UnsupportedOperation)
        );
        // -0.4 truncates to zero, which is fine
        assert_eq!(power(&dec("2"), &dec("-0.4"), 0).unwrap().to_string(), "1");
    }

    #[test]
    fn test_power_grows_exactly() {
        let result = power(&dec("10"), &dec("30"), 0).unwrap();
        assert_eq!(result.to_string(), format!("1{}", "0".repeat(30)));
    }
}
