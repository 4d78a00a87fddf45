// ============================================================================
// Decimal Value
// Arbitrary-precision base-10 decimal represented as canonical digit strings
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Arbitrary-precision decimal number backed by digit strings.
///
/// A value is a sign plus two ordered digit sequences: the integer part
/// (most-significant first, no leading zeros beyond a single `0`) and the
/// fraction part, scaled to the precision the value was constructed with.
/// Canonical zero is always positive. Values are immutable; every operation
/// returns a new `Decimal`.
///
/// Equality and ordering are numeric: trailing fraction zeros are not
/// significant, so `"1.50"` and `"1.5"` compare equal.
///
/// # Example
/// ```ignore
/// use decimal_engine::decimal::Decimal;
///
/// let price = Decimal::parse("123.45", 2)?;      // 123.45
/// let qty: Decimal = "1.5e2".parse()?;           // 150.00000000000000
/// assert_eq!(price.to_string(), "123.45");
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    negative: bool,
    /// Integer digits, canonical: no leading zeros, at least `"0"`.
    integer: String,
    /// Fraction digits at the construction precision; may be empty.
    fraction: String,
}

impl Decimal {
    /// Default number of fraction digits a result is truncated or padded to.
    pub const DEFAULT_PRECISION: usize = 14;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonical zero (positive, no fraction digits).
    #[inline]
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: "0".to_string(),
            fraction: String::new(),
        }
    }

    /// The value one, with no fraction digits.
    #[inline]
    pub fn one() -> Self {
        Self {
            negative: false,
            integer: "1".to_string(),
            fraction: String::new(),
        }
    }

    #[inline]
    pub(crate) fn ten() -> Self {
        Self {
            negative: false,
            integer: "10".to_string(),
            fraction: String::new(),
        }
    }

    /// Parse a decimal from text, truncating/padding the fraction to
    /// `precision` digits.
    ///
    /// Accepts plain decimal syntax (`[+-]?digits[.digits]`) and scientific
    /// syntax (the same mantissa followed by `e`/`E`, an optional sign and
    /// exponent digits). Scientific values are normalized by scaling the
    /// mantissa with a power of ten.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the text matches neither grammar.
    pub fn parse(text: &str, precision: usize) -> NumericResult<Self> {
        let parts = scan(text)?;
        match parts.exponent {
            None => Ok(Self::from_ascii_parts(
                parts.negative,
                parts.int,
                parts.frac,
                precision,
            )),
            Some((exp_negative, exp_digits)) => {
                // The mantissa keeps its full fraction width; only the final
                // scaled value is rounded to the requested precision.
                let mantissa = Self::from_ascii_parts(
                    parts.negative,
                    parts.int,
                    parts.frac,
                    parts.frac.len(),
                );
                let exponent = Self::from_ascii_parts(false, exp_digits, "", 0);
                let scale = crate::engine::power::power(&Self::ten(), &exponent, 0)
                    .map_err(|_| NumericError::InvalidFormat)?;
                if exp_negative {
                    Ok(crate::engine::divide::divide(&mantissa, &scale, precision))
                } else {
                    Ok(crate::engine::multiply::multiply(
                        &mantissa, &scale, precision,
                    ))
                }
            },
        }
    }

    /// Build a canonical value from raw ASCII digit parts.
    ///
    /// Leading zeros of the integer part are stripped (keeping a single `0`),
    /// the fraction is truncated or right-padded to `precision` digits, and a
    /// zero value is normalized to the positive sign.
    pub(crate) fn from_ascii_parts(
        negative: bool,
        int_part: &str,
        frac_part: &str,
        precision: usize,
    ) -> Self {
        let trimmed = int_part.trim_start_matches('0');
        let integer = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };

        let mut fraction: String = frac_part.chars().take(precision).collect();
        while fraction.len() < precision {
            fraction.push('0');
        }

        let is_zero = integer == "0" && fraction.bytes().all(|b| b == b'0');
        Self {
            negative: negative && !is_zero,
            integer,
            fraction,
        }
    }

    /// Build a canonical value from a buffer of digit values (0-9), the last
    /// `frac_len` of which are fraction digits.
    ///
    /// Used by the longhand algorithms, whose digit walks produce combined
    /// integer+fraction buffers.
    pub(crate) fn from_aligned_digits(
        negative: bool,
        digits: &[u8],
        frac_len: usize,
        precision: usize,
    ) -> Self {
        let (int_digits, frac_digits) = if digits.len() >= frac_len {
            digits.split_at(digits.len() - frac_len)
        } else {
            (&[][..], digits)
        };

        let int_part: String = int_digits.iter().map(|d| (d + b'0') as char).collect();
        // A result buffer shorter than its scale is missing leading fraction
        // zeros.
        let mut frac_part = String::with_capacity(frac_len);
        for _ in 0..frac_len - frac_digits.len() {
            frac_part.push('0');
        }
        frac_part.extend(frac_digits.iter().map(|d| (d + b'0') as char));

        Self::from_ascii_parts(negative, &int_part, &frac_part, precision)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Integer digits, most-significant first (`"0"` for zero).
    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fraction digits at this value's scale; empty for integer-only values.
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Number of fraction digits this value carries.
    #[inline]
    pub fn scale(&self) -> usize {
        self.fraction.len()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.bytes().all(|b| b == b'0')
    }

    /// Check if the value is negative. Canonical zero is never negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if the value has no significant fraction digits.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.fraction.bytes().all(|b| b == b'0')
    }

    // ========================================================================
    // Value Operations
    // ========================================================================

    /// Return the value with the opposite sign. Zero stays positive.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            Self {
                negative: !self.negative,
                integer: self.integer.clone(),
                fraction: self.fraction.clone(),
            }
        }
    }

    /// Return the magnitude of the value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            integer: self.integer.clone(),
            fraction: self.fraction.clone(),
        }
    }

    /// Truncate or zero-pad the fraction to exactly `precision` digits.
    ///
    /// This is hard truncation, not half-up rounding: digits beyond the
    /// requested precision are dropped. `precision = 0` yields an
    /// integer-only value.
    pub fn round(&self, precision: usize) -> Self {
        Self::from_ascii_parts(self.negative, &self.integer, &self.fraction, precision)
    }
}

// ============================================================================
// Text Grammar
// ============================================================================

struct TextParts<'a> {
    negative: bool,
    int: &'a str,
    frac: &'a str,
    exponent: Option<(bool, &'a str)>,
}

/// Split text into sign/integer/fraction/exponent parts.
///
/// The grammar is strict: one or more integer digits, an optional `.` with
/// one or more fraction digits, an optional `e`/`E` with an optional sign and
/// one or more exponent digits. No whitespace, nothing trailing.
fn scan(text: &str) -> NumericResult<TextParts<'_>> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'+') => {
            pos += 1;
            false
        },
        Some(b'-') => {
            pos += 1;
            true
        },
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == int_start {
        return Err(NumericError::InvalidFormat);
    }
    let int = &text[int_start..pos];

    let mut frac = "";
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == frac_start {
            return Err(NumericError::InvalidFormat);
        }
        frac = &text[frac_start..pos];
    }

    let mut exponent = None;
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;
        let exp_negative = match bytes.get(pos) {
            Some(b'+') => {
                pos += 1;
                false
            },
            Some(b'-') => {
                pos += 1;
                true
            },
            _ => false,
        };
        let exp_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_start {
            return Err(NumericError::InvalidFormat);
        }
        exponent = Some((exp_negative, &text[exp_start..pos]));
    }

    if pos != bytes.len() {
        return Err(NumericError::InvalidFormat);
    }

    Ok(TextParts {
        negative,
        int,
        frac,
        exponent,
    })
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    /// Numeric equality: `"1.50"` equals `"1.5"`.
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative
            && crate::engine::compare::compare_magnitude(self, other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.integer.hash(state);
        // Trailing fraction zeros are not significant
        self.fraction.trim_end_matches('0').hash(state);
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    /// Sign-aware ordering composed from the magnitude comparator.
    fn cmp(&self, other: &Self) -> Ordering {
        use crate::engine::compare::compare_magnitude;
        match (self.negative, other.negative) {
            (false, false) => compare_magnitude(self, other),
            (true, true) => compare_magnitude(other, self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            f.write_str(&self.fraction)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Decimal {
    type Err = NumericError;

    /// Parse at the default precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Self::DEFAULT_PRECISION)
    }
}

// Infallible operators for ergonomics, at the default precision. Use a
// configured engine or backend for explicit precision control.
impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        crate::engine::add_sub::add(&self, &rhs, Self::DEFAULT_PRECISION)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        crate::engine::add_sub::subtract(&self, &rhs, Self::DEFAULT_PRECISION)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        crate::engine::multiply::multiply(&self, &rhs, Self::DEFAULT_PRECISION)
    }
}

impl Div for Decimal {
    type Output = Self;

    /// Division by zero yields zero (documented engine policy).
    fn div(self, rhs: Self) -> Self::Output {
        crate::engine::divide::divide(&self, &rhs, Self::DEFAULT_PRECISION)
    }
}

impl Rem for Decimal {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        crate::engine::divide::modulus(&self, &rhs, Self::DEFAULT_PRECISION)
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Decimal {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only; the engine itself never
    /// leaves digit strings.
    pub fn from_rust_decimal(d: rust_decimal::Decimal, precision: usize) -> Self {
        Self::parse(&d.to_string(), precision)
            .expect("rust_decimal renders valid decimal syntax")
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if the value does not fit `rust_decimal`'s
    /// 96-bit mantissa.
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.to_string())
            .map_err(|_| NumericError::PrecisionLoss)
    }
}

// ============================================================================
// Serde (string form, as rust_decimal's serde-str does)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
