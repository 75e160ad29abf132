//! Segmented Sieve of Eratosthenes.
//!
//! [`segmented_sieve`] lists every prime up to `n` while holding only O(√n)
//! sieve flags at a time: a dense [`sieve`] finds the base primes up to
//! ⌊√n⌋ + 1, then the rest of the range is swept in windows of that width.
//!
//! ```
//! assert_eq!(segsieve::segmented_sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! assert_eq!(segsieve::segmented_sieve(1).len(), 0);
//! ```

pub mod base;
pub mod math;
pub mod segmented;
pub mod verify;

pub use base::sieve;
pub use segmented::{segment_limit, segmented_sieve, sieve_window, windows, Window, Windows};
pub use verify::{verify, VerifyError};
