//! Core domain types for nthprime.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! The arithmetic lives in `nthprime-core`; everything here can be used from
//! any layer (library, configuration, binary).

mod bounds;
mod index;
mod witness;

pub use bounds::PrimeBounds;
pub use index::{InvalidIndexError, PrimeIndex};
pub use witness::{UnknownPolicyError, WitnessPolicy, WitnessSet};

use std::fmt;

use thiserror::Error;

// ============================================================================
// Search Errors
// ============================================================================

/// Everything that can stop an n-th prime computation.
///
/// Bound-estimate misses are not errors: the search recovers from them by
/// scanning past the estimated interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NthPrimeError {
    #[error(transparent)]
    InvalidIndex(#[from] InvalidIndexError),
    #[error("prime index {index} exceeds the 64-bit search range")]
    IndexTooLarge { index: u64 },
    #[error("candidate overflowed u64 while searching for prime index {index}")]
    CandidateOverflow { index: u64 },
}

// ============================================================================
// Search Phases
// ============================================================================

/// Which stage of the search produced a prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPhase {
    /// Small indices answered without scanning.
    Exact,
    /// Found inside the estimated `[lower, upper]` interval.
    Bounded,
    /// Found above `upper`; the estimate missed.
    Fallback,
}

impl SearchPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchPhase::Exact => "exact",
            SearchPhase::Bounded => "bounded",
            SearchPhase::Fallback => "fallback",
        }
    }
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
