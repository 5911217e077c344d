//! End-to-end n-th prime searches

use insta::assert_snapshot;
use nthprime_core::{
    NthPrimeError, PrimeIndex, PrimeSearch, SearchOptions, SearchPhase, WitnessPolicy,
    count_primes_up_to, is_prime_u64, nth_prime, primes,
};

use crate::common::{KNOWN_PRIMES, primes_up_to};

#[test]
fn known_scenarios() {
    for &(n, p) in KNOWN_PRIMES {
        assert_eq!(nth_prime(n), Ok(p), "p_{n}");
    }
}

#[test]
#[ignore = "scans roughly 6 * 10^12 candidates"]
fn largest_scenario() {
    assert_eq!(nth_prime(431_331_120_407), Ok(12_562_389_345_433));
}

#[test]
fn zero_is_an_invalid_index() {
    assert!(matches!(nth_prime(0), Err(NthPrimeError::InvalidIndex(_))));
}

#[test]
fn leading_sequence_matches_sieve() {
    let reference = primes_up_to(2_000);
    let found: Vec<u64> = (1..=reference.len() as u64)
        .map(|n| nth_prime(n).unwrap())
        .collect();
    assert_eq!(found, reference);
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(found.iter().all(|&p| is_prime_u64(p)));
}

#[test]
fn prime_count_round_trips() {
    for n in [1, 2, 3, 4, 5, 6, 50, 999, 1_000, 4_321] {
        let p = nth_prime(n).unwrap();
        assert_eq!(count_primes_up_to(p), n, "pi(p_{n})");
        assert_eq!(count_primes_up_to(p - 1), n - 1, "pi(p_{n} - 1)");
    }
}

#[test]
fn iterator_agrees_with_search() {
    for (i, p) in primes().take(300).enumerate() {
        assert_eq!(nth_prime(i as u64 + 1), Ok(p));
    }
}

#[test]
fn searches_are_idempotent() {
    let first: Vec<_> = (1..=40).map(nth_prime).collect();
    let second: Vec<_> = (1..=40).map(nth_prime).collect();
    assert_eq!(first, second);
}

#[test]
fn dusart_regime_search() {
    let search = PrimeSearch::new(SearchOptions {
        witnesses: WitnessPolicy::Standard,
        progress_interval: None,
    });
    let report = search.find(PrimeIndex::new(688_383).unwrap()).unwrap();
    assert_eq!(report.prime, 10_384_261);
    assert_eq!(report.phase, SearchPhase::Bounded);
}

#[test]
fn report_summary() {
    let report = PrimeSearch::default()
        .find(PrimeIndex::new(10).unwrap())
        .unwrap();
    let summary = format!(
        "p_{} = {} in {} ({} phase, {} below lower, {} tested)",
        report.index,
        report.prime,
        report.bounds,
        report.phase,
        report.precounted,
        report.tested
    );
    assert_snapshot!(summary, @"p_10 = 29 in [21, 32] (bounded phase, 8 below lower, 14 tested)");
}
