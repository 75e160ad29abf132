//! Dense Sieve of Eratosthenes over `[0, limit]`.
//!
//! Used to bootstrap the base primes for the segmented sieve, and doubles as
//! the trusted reference when the whole range comfortably fits in memory.

use crate::math::{isqrt, prime_count_upper};

/// All primes in `[2, limit]`, ascending.
///
/// Allocates one `bool` per integer up to `limit`; empty when `limit < 2`.
pub fn sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return vec![];
    }

    let len = (limit + 1) as usize;
    let mut is_prime = vec![true; len];
    is_prime[0] = false;
    is_prime[1] = false;

    // Multiples below p² already fell to a smaller factor.
    let sqrt_limit = isqrt(limit) as usize;
    for p in 2..=sqrt_limit {
        if is_prime[p] {
            let mut j = p * p;
            while j < len {
                is_prime[j] = false;
                j += p;
            }
        }
    }

    let mut r = Vec::with_capacity(prime_count_upper(limit));
    r.extend(
        is_prime
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag)
            .map(|(i, _)| i as u64),
    );
    r
}
