//! Bound estimator against exact primes

use nthprime_core::{DUSART_THRESHOLD, PrimeBounds, PrimeIndex, estimate};

use crate::common::{KNOWN_PRIMES, primes_up_to};

fn bounds_for(n: u64) -> PrimeBounds {
    estimate(PrimeIndex::new(n).unwrap()).unwrap()
}

#[test]
fn every_prime_below_22_million_lies_in_its_interval() {
    // Reaches p_1389261, well past the Dusart threshold.
    let primes = primes_up_to(22_000_000);
    assert!(primes.len() as u64 > DUSART_THRESHOLD);
    for (i, &p) in primes.iter().enumerate() {
        let n = i as u64 + 1;
        let bounds = bounds_for(n);
        assert!(bounds.contains(p), "p_{n} = {p} outside {bounds}");
    }
}

#[test]
fn threshold_neighbours() {
    for (n, p) in [
        (5, 11),
        (6, 13),
        (DUSART_THRESHOLD - 1, 10_384_259),
        (DUSART_THRESHOLD, 10_384_261),
    ] {
        let bounds = bounds_for(n);
        assert!(bounds.contains(p), "p_{n} = {p} outside {bounds}");
    }
}

#[test]
fn known_primes_lie_in_their_intervals() {
    for &(n, p) in KNOWN_PRIMES {
        assert!(bounds_for(n).contains(p));
    }
    assert!(bounds_for(431_331_120_407).contains(12_562_389_345_433));
}
