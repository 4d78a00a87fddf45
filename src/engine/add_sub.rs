// ============================================================================
// Addition / Subtraction
// Digit-wise base-10 arithmetic with carry and borrow propagation
// ============================================================================

use crate::decimal::Decimal;
use crate::engine::align::{align, DigitBuf};
use crate::engine::compare::compare_digit_slices;
use smallvec::smallvec;
use std::cmp::Ordering;

/// Add two decimals, truncating/padding the result to `precision` fraction
/// digits.
///
/// Matching signs add digit-wise with carry propagation; mismatched signs
/// subtract the smaller magnitude from the larger with borrow propagation and
/// take the larger operand's sign. Equal magnitudes of opposite sign yield
/// canonical (positive) zero.
pub(crate) fn add(a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
    let al = align(a, b);

    if al.same_sign {
        let sum = add_digit_slices(&al.a, &al.b);
        return Decimal::from_aligned_digits(al.result_negative, &sum, al.frac_len, precision);
    }

    match compare_digit_slices(&al.a, &al.b) {
        Ordering::Equal => Decimal::from_aligned_digits(false, &[0], al.frac_len, precision),
        ord => {
            let (larger, smaller) = if ord == Ordering::Greater {
                (&al.a, &al.b)
            } else {
                (&al.b, &al.a)
            };
            let diff = sub_digit_slices(larger, smaller);
            Decimal::from_aligned_digits(al.result_negative, &diff, al.frac_len, precision)
        },
    }
}

/// Subtract `b` from `a`: defined as `a + (-b)`.
pub(crate) fn subtract(a: &Decimal, b: &Decimal, precision: usize) -> Decimal {
    add(a, &b.negate(), precision)
}

/// Sum of two digit sequences, right-aligned. The result has one digit more
/// than the longer input (possibly a leading zero).
pub(crate) fn add_digit_slices(a: &[u8], b: &[u8]) -> DigitBuf {
    let width = a.len().max(b.len());
    let mut out: DigitBuf = smallvec![0; width + 1];
    let mut carry = 0u8;
    for pos in 0..width {
        let da = if pos < a.len() { a[a.len() - 1 - pos] } else { 0 };
        let db = if pos < b.len() { b[b.len() - 1 - pos] } else { 0 };
        let sum = da + db + carry;
        out[width - pos] = sum % 10;
        carry = sum / 10;
    }
    out[0] = carry;
    out
}

/// Difference of two digit sequences, right-aligned. `larger` must be
/// numerically greater than or equal to `smaller`; the result keeps
/// `larger`'s width (leading zeros are trimmed by canonical construction).
pub(crate) fn sub_digit_slices(larger: &[u8], smaller: &[u8]) -> DigitBuf {
    let width = larger.len();
    let mut out: DigitBuf = smallvec![0; width];
    let mut borrow = 0i8;
    for pos in 0..width {
        let dl = larger[width - 1 - pos] as i8;
        let ds = if pos < smaller.len() {
            smaller[smaller.len() - 1 - pos] as i8
        } else {
            0
        };
        let mut diff = dl - ds - borrow;
        borrow = 0;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        }
        out[width - 1 - pos] = diff as u8;
    }
    out
}
