// ============================================================================
// Operand Alignment
// Pads two operands to equal integer/fraction digit widths
// ============================================================================

use crate::decimal::Decimal;
use crate::engine::compare::compare_magnitude;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Digit buffer holding values 0-9, most-significant first. Small operands
/// stay on the stack.
pub(crate) type DigitBuf = SmallVec<[u8; 32]>;

/// Two operands padded to an identical digit shape, plus the sign metadata
/// the positional algorithms need.
///
/// `a` and `b` are combined integer+fraction digit sequences of equal length;
/// the last `frac_len` digits of each are the fraction. Alignment is a pure
/// transform: the inputs are not modified.
pub(crate) struct Aligned {
    pub a: DigitBuf,
    pub b: DigitBuf,
    pub frac_len: usize,
    /// Whether the original operand signs agree.
    pub same_sign: bool,
    /// Sign of the operand with the larger magnitude; ties take `b`'s sign
    /// (invisible in results, since zero is normalized to positive).
    pub result_negative: bool,
}

/// Align two decimals for position-wise digit arithmetic.
///
/// Integer parts are left-padded and fraction parts right-padded with zeros
/// to the wider of the two operands.
pub(crate) fn align(a: &Decimal, b: &Decimal) -> Aligned {
    let int_width = a.integer_digits().len().max(b.integer_digits().len());
    let frac_width = a.fraction_digits().len().max(b.fraction_digits().len());

    let result_negative = match compare_magnitude(a, b) {
        Ordering::Greater => a.is_negative(),
        _ => b.is_negative(),
    };

    Aligned {
        a: pack(a, int_width, frac_width),
        b: pack(b, int_width, frac_width),
        frac_len: frac_width,
        same_sign: a.is_negative() == b.is_negative(),
        result_negative,
    }
}

/// Combined integer+fraction digit values of one operand at its own scale.
pub(crate) fn magnitude_digits(d: &Decimal) -> (DigitBuf, usize) {
    let frac = d.fraction_digits();
    let mut buf = DigitBuf::with_capacity(d.integer_digits().len() + frac.len());
    buf.extend(d.integer_digits().bytes().map(|c| c - b'0'));
    buf.extend(frac.bytes().map(|c| c - b'0'));
    (buf, frac.len())
}

fn pack(d: &Decimal, int_width: usize, frac_width: usize) -> DigitBuf {
    let int = d.integer_digits();
    let frac = d.fraction_digits();
    let mut buf = DigitBuf::with_capacity(int_width + frac_width);
    buf.extend(std::iter::repeat(0).take(int_width - int.len()));
    buf.extend(int.bytes().map(|c| c - b'0'));
    buf.extend(frac.bytes().map(|c| c - b'0'));
    buf.extend(std::iter::repeat(0).take(frac_width - frac.len()));
    buf
}

/// Drop leading zero digits, keeping at least one digit.
pub(crate) fn trim_leading(digits: &[u8]) -> &[u8] {
    let start = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len().saturating_sub(1));
    &digits[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, s.split('.').nth(1).map_or(0, str::len)).unwrap()
    }

    #[test]
    fn test_align_pads_both_parts() {
        let al = align(&dec("123.4"), &dec("7.25"));
        assert_eq!(al.a.as_slice(), &[1, 2, 3, 4, 0]);
        assert_eq!(al.b.as_slice(), &[0, 0, 7, 2, 5]);
        assert_eq!(al.frac_len, 2);
        assert!(al.same_sign);
    }

    #[test]
    fn test_align_sign_metadata() {
        let al = align(&dec("-5"), &dec("3"));
        assert!(!al.same_sign);
        // Larger magnitude is negative
        assert!(al.result_negative);

        let al = align(&dec("2"), &dec("-3"));
        assert!(!al.same_sign);
        assert!(al.result_negative);

        let al = align(&dec("4"), &dec("-3"));
        assert!(!al.result_negative);
    }

    #[test]
    fn test_align_is_pure() {
        let a = dec("1.5");
        let b = dec("20");
        let _ = align(&a, &b);
        assert_eq!(a.to_string(), "1.5");
        assert_eq!(b.to_string(), "20");
    }

    #[test]
    fn test_magnitude_digits() {
        let (digits, frac_len) = magnitude_digits(&dec("-30.25"));
        assert_eq!(digits.as_slice(), &[3, 0, 2, 5]);
        assert_eq!(frac_len, 2);
    }

    #[test]
    fn test_trim_leading() {
        assert_eq!(trim_leading(&[0, 0, 1, 0]), &[1, 0]);
        assert_eq!(trim_leading(&[0, 0]), &[0]);
        assert_eq!(trim_leading(&[5]), &[5]);
    }
}
