//! Deterministic Miller-Rabin primality testing.
//!
//! For an odd `num > 3`, write `num - 1 = 2^r * d` with `d` odd. A prime
//! `num` satisfies, for every base `a`, either `a^d = 1 (mod num)` or
//! `a^(2^i * d) = -1 (mod num)` for some `0 <= i < r`. A base for which
//! neither holds is a witness to compositeness.
//!
//! With a fixed base list the test is exact below the list's proven limit
//! (see [`WitnessSet`](nthprime_types::WitnessSet)). [`is_prime`] takes any
//! base list and performs no range check; [`is_prime_with`] picks the list
//! per candidate.

use nthprime_types::WitnessPolicy;

/// `a * b mod modulus` without overflow, via a 128-bit product.
#[inline]
#[must_use]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(modulus)) as u64
}

/// `base^exp mod modulus` by square-and-multiply, reducing at every step.
#[must_use]
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % modulus;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Miller-Rabin over `witnesses`, in order, stopping at the first witness
/// to compositeness. Bases `>= num` are skipped.
#[must_use]
pub fn is_prime(num: u64, witnesses: &[u64]) -> bool {
    if num < 2 {
        return false;
    }
    if num == 2 || num == 3 {
        return true;
    }
    if num.is_multiple_of(2) {
        return false;
    }

    let (r, d) = split_even_part(num - 1);
    witnesses
        .iter()
        .filter(|&&a| a < num)
        .all(|&a| passes_round(num, a, r, d))
}

/// [`is_prime`] with the witness set `policy` selects for `num`.
#[must_use]
pub fn is_prime_with(num: u64, policy: WitnessPolicy) -> bool {
    is_prime(num, policy.witnesses_for(num).bases())
}

/// Exact primality for any `u64`.
#[must_use]
pub fn is_prime_u64(num: u64) -> bool {
    is_prime_with(num, WitnessPolicy::Auto)
}

/// `(r, d)` with `value = 2^r * d` and `d` odd. `value` must be non-zero.
fn split_even_part(value: u64) -> (u32, u64) {
    let r = value.trailing_zeros();
    (r, value >> r)
}

/// One Miller-Rabin round for base `a`. True if `a` is not a witness.
fn passes_round(num: u64, a: u64, r: u32, d: u64) -> bool {
    let minus_one = num - 1;
    let mut x = mod_pow(a, d, num);
    if x == 1 || x == minus_one {
        return true;
    }
    for _ in 1..r {
        x = mul_mod(x, x, num);
        if x == minus_one {
            return true;
        }
    }
    false
}
