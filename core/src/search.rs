//! The n-th prime search.
//!
//! Given `[lower, upper]` from [`estimate`], the search:
//!
//! 1. counts the primes strictly below `lower` (pre-count),
//! 2. walks odd candidates from `lower` through `upper` until the running
//!    count reaches `n` (bounded phase),
//! 3. keeps walking past `upper` if it has not (fallback phase).
//!
//! The fallback phase only runs if the bound formulas are wrong. It is kept
//! so a bad estimate costs time instead of correctness.

use std::iter::FusedIterator;
use std::num::NonZeroU64;

use nthprime_types::{NthPrimeError, PrimeBounds, PrimeIndex, SearchPhase, WitnessPolicy};

use crate::bounds::estimate;
use crate::primality::{is_prime_u64, is_prime_with};

/// Knobs for a [`PrimeSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Witness set selection for every candidate.
    pub witnesses: WitnessPolicy,
    /// Emit a debug progress event every this many primality tests.
    pub progress_interval: Option<NonZeroU64>,
}

/// Outcome of a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub index: PrimeIndex,
    pub prime: u64,
    pub bounds: PrimeBounds,
    /// Primes counted below `bounds.lower()` before the interval walk.
    pub precounted: u64,
    /// Primality tests run, across all phases.
    pub tested: u64,
    pub phase: SearchPhase,
}

/// A configured n-th prime search. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeSearch {
    options: SearchOptions,
}

impl PrimeSearch {
    #[must_use]
    pub const fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Find `p_index`.
    pub fn find(&self, index: PrimeIndex) -> Result<SearchReport, NthPrimeError> {
        let n = index.get();
        if n == 1 {
            return Ok(SearchReport {
                index,
                prime: 2,
                bounds: PrimeBounds::exact(2),
                precounted: 0,
                tested: 0,
                phase: SearchPhase::Exact,
            });
        }

        let bounds = estimate(index)?;
        let mut scan = Scan::new(index, self.options);
        let Located {
            prime,
            precounted,
            phase,
        } = scan.locate(bounds)?;

        let report = SearchReport {
            index,
            prime,
            bounds,
            precounted,
            tested: scan.tested,
            phase,
        };
        tracing::debug!(
            index = n,
            prime,
            phase = %phase,
            tested = scan.tested,
            "search complete"
        );
        Ok(report)
    }
}

/// The n-th prime (1-indexed) with default options.
pub fn nth_prime(n: u64) -> Result<u64, NthPrimeError> {
    nth_prime_for(PrimeIndex::new(n)?)
}

/// The prime at `index` with default options.
pub fn nth_prime_for(index: PrimeIndex) -> Result<u64, NthPrimeError> {
    PrimeSearch::default().find(index).map(|report| report.prime)
}

/// π(x): how many primes are `<= x`, by linear scan.
#[must_use]
pub fn count_primes_up_to(x: u64) -> u64 {
    if x < 2 {
        return 0;
    }
    let odd = (3..=x)
        .step_by(2)
        .filter(|&candidate| is_prime_with(candidate, WitnessPolicy::Auto))
        .count() as u64;
    odd + 1
}

/// All primes in increasing order, ending at the largest prime below 2^64.
#[must_use]
pub fn primes() -> Primes {
    Primes { next: Some(2) }
}

/// Iterator returned by [`primes`].
#[derive(Debug, Clone)]
pub struct Primes {
    next: Option<u64>,
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mut candidate = self.next.take()?;
        loop {
            let following = next_candidate(candidate);
            if candidate == 2 || is_prime_u64(candidate) {
                self.next = following;
                return Some(candidate);
            }
            candidate = following?;
        }
    }
}

impl FusedIterator for Primes {}

#[derive(Debug, PartialEq, Eq)]
enum Walk {
    Found(u64),
    /// Ran past the ceiling with `count` primes seen.
    Exhausted { next: u64, count: u64 },
}

/// Where a search ended up and how it got there.
#[derive(Debug, PartialEq, Eq)]
struct Located {
    prime: u64,
    precounted: u64,
    phase: SearchPhase,
}

/// Per-call scan state: the running count lives in the walks, this only
/// tracks how much work was done.
struct Scan {
    index: u64,
    policy: WitnessPolicy,
    progress_interval: Option<NonZeroU64>,
    tested: u64,
}

impl Scan {
    fn new(index: PrimeIndex, options: SearchOptions) -> Self {
        Self {
            index: index.get(),
            policy: options.witnesses,
            progress_interval: options.progress_interval,
            tested: 0,
        }
    }

    fn test(&mut self, candidate: u64) -> bool {
        self.tested += 1;
        if let Some(every) = self.progress_interval
            && self.tested.is_multiple_of(every.get())
        {
            tracing::debug!(
                index = self.index,
                candidate,
                tested = self.tested,
                "search progress"
            );
        }
        is_prime_with(candidate, self.policy)
    }

    /// Pre-count below `bounds.lower()`, then walk to `p_index`.
    ///
    /// `bounds` is trusted only as a hint: a lower end past the target
    /// restarts from 2, an upper end short of it continues past `upper`.
    /// Both report [`SearchPhase::Fallback`].
    fn locate(&mut self, bounds: PrimeBounds) -> Result<Located, NthPrimeError> {
        let n = self.index;
        let precounted = self.count_below(bounds.lower());
        tracing::debug!(index = n, %bounds, precounted, "pre-count complete");

        if precounted >= n {
            tracing::warn!(
                index = n,
                %bounds,
                precounted,
                "lower bound lies above the target prime; rescanning from 2"
            );
            let prime = self.walk_past(2, 0)?;
            return Ok(Located {
                prime,
                precounted,
                phase: SearchPhase::Fallback,
            });
        }

        match self.walk(start_candidate(bounds.lower()), precounted, bounds.upper())? {
            Walk::Found(prime) => Ok(Located {
                prime,
                precounted,
                phase: SearchPhase::Bounded,
            }),
            Walk::Exhausted { next, count } => {
                tracing::warn!(
                    index = n,
                    %bounds,
                    count,
                    "target prime lies above the estimated interval; scanning past it"
                );
                let prime = self.walk_past(next, count)?;
                Ok(Located {
                    prime,
                    precounted,
                    phase: SearchPhase::Fallback,
                })
            }
        }
    }

    /// Number of primes strictly below `lower`.
    fn count_below(&mut self, lower: u64) -> u64 {
        if lower <= 2 {
            return 0;
        }
        let odd = (3..lower)
            .step_by(2)
            .filter(|&candidate| self.test(candidate))
            .count() as u64;
        odd + 1
    }

    /// Count `candidate` if prime; true once the count reaches the index.
    fn reaches_index(&mut self, candidate: u64, count: &mut u64) -> bool {
        if candidate == 2 || self.test(candidate) {
            *count += 1;
        }
        *count == self.index
    }

    fn advance(&self, candidate: u64) -> Result<u64, NthPrimeError> {
        next_candidate(candidate).ok_or(NthPrimeError::CandidateOverflow { index: self.index })
    }

    /// Step from `candidate` with `count` primes already below it, stopping
    /// at the index or once the candidate exceeds `ceiling`.
    fn walk(
        &mut self,
        mut candidate: u64,
        mut count: u64,
        ceiling: u64,
    ) -> Result<Walk, NthPrimeError> {
        while candidate <= ceiling {
            if self.reaches_index(candidate, &mut count) {
                return Ok(Walk::Found(candidate));
            }
            candidate = self.advance(candidate)?;
        }
        Ok(Walk::Exhausted {
            next: candidate,
            count,
        })
    }

    /// Like [`Scan::walk`] with no ceiling: only `u64` overflow stops it.
    fn walk_past(&mut self, mut candidate: u64, mut count: u64) -> Result<u64, NthPrimeError> {
        loop {
            if self.reaches_index(candidate, &mut count) {
                return Ok(candidate);
            }
            candidate = self.advance(candidate)?;
        }
    }
}

/// First candidate of the interval walk.
fn start_candidate(lower: u64) -> u64 {
    if lower == 2 || !lower.is_multiple_of(2) {
        lower
    } else {
        lower + 1
    }
}

/// 2 steps to 3; odd candidates step by 2.
fn next_candidate(candidate: u64) -> Option<u64> {
    if candidate == 2 {
        Some(3)
    } else {
        candidate.checked_add(2)
    }
}
