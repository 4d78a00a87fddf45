// ============================================================================
// Primality Test
// 6k±1 trial division over a machine-width integer
// ============================================================================

use crate::decimal::Decimal;

/// Check whether a non-negative integer-valued decimal is prime.
///
/// Negative or fractional values, zero, and one are not prime. The trial
/// division runs on a `u64`: values beyond that range cannot be tested on
/// this path and report `false` — a known range limitation of the
/// machine-width algorithm. The accelerated backend substitutes an
/// arbitrary-precision probabilistic test without this limit.
pub(crate) fn is_prime(n: &Decimal) -> bool {
    if n.is_negative() || !n.is_integral() {
        return false;
    }

    match n.integer_digits().parse::<u64>() {
        Ok(value) => trial_division(value),
        Err(_) => {
            tracing::debug!(
                "primality input exceeds machine-width range: {} digits",
                n.integer_digits().len()
            );
            false
        },
    }
}

fn trial_division(n: u64) -> bool {
    if n <= 3 {
        return n > 1;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // Candidates 5, 7, 11, 13, ... cover every prime factor up to sqrt(n)
    let mut candidate = 5u64;
    while candidate
        .checked_mul(candidate)
        .is_some_and(|square| square <= n)
    {
        if n % candidate == 0 || n % (candidate + 2) == 0 {
            return false;
        }
        candidate += 6;
    }
    true
}
