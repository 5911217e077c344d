//! Exact n-th prime computation.
//!
//! The search runs in three layers:
//!
//! ```text
//! nth_prime(n) -> PrimeSearch::find -> bounds::estimate (once)
//!                                   -> primality::is_prime (per odd candidate)
//! ```
//!
//! [`bounds`] narrows p_n to an interval using the Rosser-Schoenfeld and
//! Dusart inequalities, [`primality`] decides each candidate with a
//! deterministic Miller-Rabin test, and [`search`] counts primes up to the
//! interval and walks it until the n-th one turns up.
//!
//! Every call is independent: nothing is cached between searches.

pub mod bounds;
pub mod primality;
pub mod search;

pub use bounds::{DUSART_THRESHOLD, estimate};
pub use nthprime_types::{
    InvalidIndexError, NthPrimeError, PrimeBounds, PrimeIndex, SearchPhase, WitnessPolicy,
    WitnessSet,
};
pub use primality::{is_prime, is_prime_u64, is_prime_with, mod_pow, mul_mod};
pub use search::{
    PrimeSearch, Primes, SearchOptions, SearchReport, count_primes_up_to, nth_prime,
    nth_prime_for, primes,
};
