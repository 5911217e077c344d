//! The interval an estimate guarantees for a prime.

use std::fmt;

/// Closed interval `[lower, upper]` known to contain a particular prime.
///
/// Both ends are at least 2 and `lower <= upper`. Values outside that shape
/// cannot be built, so the search can step from `lower` without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeBounds {
    lower: u64,
    upper: u64,
}

impl PrimeBounds {
    /// Build an interval, clamping `lower` to 2 and `upper` to at least `lower`.
    #[must_use]
    pub fn new(lower: u64, upper: u64) -> Self {
        let lower = lower.max(2);
        Self {
            lower,
            upper: upper.max(lower),
        }
    }

    /// A single-point interval for primes known exactly.
    #[must_use]
    pub fn exact(prime: u64) -> Self {
        Self::new(prime, prime)
    }

    #[must_use]
    pub const fn lower(self) -> u64 {
        self.lower
    }

    #[must_use]
    pub const fn upper(self) -> u64 {
        self.upper
    }

    #[must_use]
    pub const fn contains(self, value: u64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Number of integers in the interval.
    #[must_use]
    pub const fn width(self) -> u64 {
        self.upper - self.lower + 1
    }

    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.lower == self.upper
    }
}

impl fmt::Display for PrimeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
