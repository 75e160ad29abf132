//! Cross-check the segmented sieve against the `primal` crate.

use thiserror::Error;
use tracing::debug;

use crate::segmented::segmented_sieve;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("prime count mismatch at n={n}: reference={expected} segmented={actual}")]
    CountMismatch {
        n: i64,
        expected: usize,
        actual: usize,
    },

    #[error("primes differ at n={n}, index {index}: reference={expected} segmented={actual}")]
    FirstDifference {
        n: i64,
        index: usize,
        expected: u64,
        actual: u64,
    },
}

/// Primes in `[2, n]` according to `primal`'s sieve.
pub fn reference_primes(n: i64) -> Vec<u64> {
    if n <= 1 {
        return vec![];
    }
    let n = n as usize;
    primal::Sieve::new(n)
        .primes_from(0)
        .take_while(|&p| p <= n)
        .map(|p| p as u64)
        .collect()
}

/// Run [`segmented_sieve`] for `n` and compare it with [`reference_primes`].
///
/// Returns the prime count when both agree.
pub fn verify(n: i64) -> Result<usize, VerifyError> {
    let expected = reference_primes(n);
    let actual = segmented_sieve(n);
    compare(n, &expected, &actual)?;
    debug!(n, count = actual.len(), "verified against primal");
    Ok(actual.len())
}

fn compare(n: i64, expected: &[u64], actual: &[u64]) -> Result<(), VerifyError> {
    if let Some((index, (&e, &a))) = expected
        .iter()
        .zip(actual)
        .enumerate()
        .find(|(_, (e, a))| e != a)
    {
        return Err(VerifyError::FirstDifference {
            n,
            index,
            expected: e,
            actual: a,
        });
    }
    if expected.len() != actual.len() {
        return Err(VerifyError::CountMismatch {
            n,
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}
