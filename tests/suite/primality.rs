//! Primality oracle against the sieve

use nthprime_core::{WitnessPolicy, WitnessSet, is_prime, is_prime_u64, is_prime_with};

use crate::common::sieve;

const LIMIT: usize = 1_000_000;

#[test]
fn standard_witnesses_agree_with_sieve_up_to_one_million() {
    let reference = sieve(LIMIT);
    let bases = WitnessSet::STANDARD.bases();
    for (n, &expected) in reference.iter().enumerate() {
        assert_eq!(is_prime(n as u64, bases), expected, "disagreement at {n}");
    }
}

#[test]
fn every_policy_agrees_with_sieve_on_odd_numbers() {
    let reference = sieve(100_000);
    for policy in [
        WitnessPolicy::Standard,
        WitnessPolicy::Extended,
        WitnessPolicy::Auto,
    ] {
        for n in (1..reference.len()).step_by(2) {
            assert_eq!(
                is_prime_with(n as u64, policy),
                reference[n],
                "{policy} disagrees at {n}"
            );
        }
    }
}

#[test]
fn carmichael_numbers_are_composite() {
    for n in [561, 1_105, 1_729, 2_465, 2_821, 6_601, 8_911, 41_041, 825_265] {
        assert!(!is_prime_u64(n), "{n} reported prime");
    }
}

#[test]
fn target_prime_of_largest_scenario_is_prime() {
    assert!(is_prime(12_562_389_345_433, WitnessSet::STANDARD.bases()));
    assert!(!is_prime(12_562_389_345_431, WitnessSet::STANDARD.bases()));
}
