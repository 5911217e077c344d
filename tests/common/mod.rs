//! Shared test utilities and fixtures
//!
//! A plain sieve of Eratosthenes serves as the trusted primality reference.

#![allow(dead_code)]

/// `table[i]` is true iff `i` is prime, for `i <= limit`.
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut table = vec![true; limit + 1];
    table[0] = false;
    if limit >= 1 {
        table[1] = false;
    }
    let mut i = 2;
    while i * i <= limit {
        if table[i] {
            for multiple in (i * i..=limit).step_by(i) {
                table[multiple] = false;
            }
        }
        i += 1;
    }
    table
}

/// All primes `<= limit`, in order.
pub fn primes_up_to(limit: usize) -> Vec<u64> {
    sieve(limit)
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(n, _)| n as u64)
        .collect()
}

/// Index/prime pairs every implementation must reproduce.
pub const KNOWN_PRIMES: &[(u64, u64)] = &[
    (1, 2),
    (10, 29),
    (100, 541),
    (1_000, 7_919),
    (12_345, 132_241),
    (123_456, 1_632_899),
    (1_234_567, 19_394_489),
];
