//! Analytic bounds on the n-th prime.
//!
//! For n >= 4 the interval comes from published inequalities:
//!
//! - Rosser-Schoenfeld (1962), used below [`DUSART_THRESHOLD`]:
//!   `n(ln n + ln ln n - 1) < p_n < n(ln n + ln ln n)`
//! - Dusart (2010/2018), used from [`DUSART_THRESHOLD`] upward, which adds
//!   `(ln ln n - 2)/ln n` and a second-order `1/(ln n)^2` correction.
//!
//! All terms are evaluated in `f64` and truncated with `floor`, never
//! rounded. The upper end gets `+ 1` so the inequality's strict `<` still
//! holds after truncation.

use nthprime_types::{NthPrimeError, PrimeBounds, PrimeIndex};

/// First index where the Dusart form replaces Rosser-Schoenfeld.
pub const DUSART_THRESHOLD: u64 = 688_383;

/// Constant in Dusart's lower-bound correction term.
const DUSART_LOWER_CONSTANT: f64 = 11.321;

/// Interval guaranteed to contain `p_index`.
///
/// Indices 1-3 are answered exactly. The only failure is an index whose
/// upper bound does not fit in `u64`.
pub fn estimate(index: PrimeIndex) -> Result<PrimeBounds, NthPrimeError> {
    let n = index.get();
    let exact = match n {
        1 => Some(2),
        2 => Some(3),
        3 => Some(5),
        _ => None,
    };
    if let Some(prime) = exact {
        tracing::trace!(index = n, regime = "exact", prime, "estimated bounds");
        return Ok(PrimeBounds::exact(prime));
    }

    let (lower, upper, regime) = if n < DUSART_THRESHOLD {
        let (lower, upper) = rosser_schoenfeld(n as f64);
        (lower, upper, "rosser_schoenfeld")
    } else {
        let (lower, upper) = dusart(n as f64);
        (lower, upper, "dusart")
    };

    let too_large = NthPrimeError::IndexTooLarge { index: n };
    let upper = floor_to_u64(upper)
        .and_then(|upper| upper.checked_add(1))
        .ok_or(too_large.clone())?;
    let mut lower = floor_to_u64(lower).ok_or(too_large)?.max(2);
    if lower > 2 && lower.is_multiple_of(2) {
        lower += 1;
    }

    let bounds = PrimeBounds::new(lower, upper);
    tracing::trace!(index = n, regime, %bounds, "estimated bounds");
    Ok(bounds)
}

fn rosser_schoenfeld(n: f64) -> (f64, f64) {
    let ln_n = n.ln();
    let ln_ln_n = ln_n.ln();
    (n * (ln_n + ln_ln_n - 1.0), n * (ln_n + ln_ln_n))
}

fn dusart(n: f64) -> (f64, f64) {
    let ln_n = n.ln();
    let ln_ln_n = ln_n.ln();
    let base = ln_n + ln_ln_n - 1.0 + (ln_ln_n - 2.0) / ln_n;
    let quadratic = ln_ln_n * ln_ln_n - 6.0 * ln_ln_n;
    let denominator = 2.0 * ln_n * ln_n;
    (
        n * (base - (quadratic + DUSART_LOWER_CONSTANT) / denominator),
        n * (base - quadratic / denominator),
    )
}

/// `floor(value)` if it is representable as `u64`.
fn floor_to_u64(value: f64) -> Option<u64> {
    // u64::MAX rounds up to exactly 2^64 as f64, so `<` excludes it.
    (value.is_finite() && value >= 0.0 && value < u64::MAX as f64).then(|| value.floor() as u64)
}
