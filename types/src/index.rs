//! Validated prime index.
//!
//! Primes are counted from 1 (`p_1 = 2`). Holding a `PrimeIndex` is proof the
//! position is at least 1, so the search never has to re-check it.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 1-indexed position in the sequence of primes.
///
/// # Invariants
///
/// - The index is never zero
///
/// # Serde
///
/// Serializes as a plain integer. Deserialization rejects `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PrimeIndex(NonZeroU64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("prime index must be at least 1")]
pub struct InvalidIndexError;

impl PrimeIndex {
    /// The index of the first prime, 2.
    pub const FIRST: PrimeIndex = PrimeIndex(NonZeroU64::MIN);

    pub fn new(value: u64) -> Result<Self, InvalidIndexError> {
        NonZeroU64::new(value).map(Self).ok_or(InvalidIndexError)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for PrimeIndex {
    type Error = InvalidIndexError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PrimeIndex> for u64 {
    fn from(value: PrimeIndex) -> Self {
        value.get()
    }
}

impl fmt::Display for PrimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
