//! Segmented Sieve of Eratosthenes.
//!
//! Strategy:
//!   1. Base sieve: find all primes ≤ L, where L = ⌊√n⌋ + 1
//!   2. Sweep `[L, n]` in consecutive half-open windows of width L
//!   3. For each window, strike multiples of the base primes
//!   4. Collect the survivors
//!
//! Only one window buffer of L flags is alive at a time, so marking memory
//! is O(√n) rather than the O(n) table a flat sieve needs.

use tracing::{debug, trace};

use crate::base;
use crate::math::{isqrt, prime_count_upper};

/// Half-open range `[low, high)` of integers sieved together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub low: u64,
    pub high: u64,
}

impl Window {
    pub fn len(&self) -> usize {
        (self.high - self.low) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.high <= self.low
    }

    pub fn contains(&self, v: u64) -> bool {
        self.low <= v && v < self.high
    }
}

/// Width of every window, and the bound up to which base primes are needed.
pub fn segment_limit(n: u64) -> u64 {
    isqrt(n) + 1
}

/// Iterator over the windows swept for bound `n`.
///
/// Starts at `[L, 2L)`, advances by L, and clips the last window to end at
/// `n + 1`. Yields nothing for `n <= 1`.
#[derive(Debug, Clone)]
pub struct Windows {
    step: u64,
    end: u64,
    next_low: Option<u64>,
}

pub fn windows(n: u64) -> Windows {
    let step = segment_limit(n);
    let end = n.saturating_add(1);
    let next_low = if n > 1 && step <= n { Some(step) } else { None };
    Windows { step, end, next_low }
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let low = self.next_low.take()?;
        let high = low.saturating_add(self.step).min(self.end);
        if high < self.end {
            self.next_low = Some(high);
        }
        Some(Window { low, high })
    }
}

/// Strike the multiples of `base_primes` inside `window` and yield the
/// survivors in ascending order.
///
/// `buf` is reset to all-true for this window; pass the same buffer for every
/// window so a single allocation serves the whole sweep.
pub fn sieve_window<'a>(
    window: Window,
    base_primes: &[u64],
    buf: &'a mut Vec<bool>,
) -> impl Iterator<Item = u64> + 'a {
    buf.clear();
    buf.resize(window.len(), true);

    for &p in base_primes {
        // Smallest multiple of p that is >= low.
        let start = window.low.div_ceil(p) * p;
        for i in (start..window.high).step_by(p as usize) {
            debug_assert!(i >= window.low);
            buf[(i - window.low) as usize] = false;
        }
    }

    let low = window.low;
    let buf: &'a Vec<bool> = buf;
    buf.iter()
        .enumerate()
        .filter(|&(_, &flag)| flag)
        .map(move |(i, _)| low + i as u64)
}

/// All primes in `[2, n]`, ascending and distinct. Empty for `n <= 1`.
pub fn segmented_sieve(n: i64) -> Vec<u64> {
    if n <= 1 {
        return vec![];
    }
    let n = n as u64;

    let limit = segment_limit(n);
    let base_primes = base::sieve(limit);
    debug!(n, limit, base_primes = base_primes.len(), "segmented sieve");

    let mut result = Vec::with_capacity(prime_count_upper(n));
    result.extend_from_slice(&base_primes);

    let mut buf = Vec::with_capacity(limit as usize);
    for window in windows(n) {
        let before = result.len();
        result.extend(sieve_window(window, &base_primes, &mut buf));
        trace!(
            low = window.low,
            high = window.high,
            found = result.len() - before,
            "window"
        );
    }

    // Seed and window ranges only meet at L, which a window strikes when it
    // is a base prime; sort + dedup keeps the output contract regardless.
    result.sort_unstable();
    result.dedup();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_cases() {
        assert_eq!(segmented_sieve(i64::MIN), Vec::<u64>::new());
        assert_eq!(segmented_sieve(-7), Vec::<u64>::new());
        assert_eq!(segmented_sieve(0), Vec::<u64>::new());
        assert_eq!(segmented_sieve(1), Vec::<u64>::new());
        assert_eq!(segmented_sieve(2), vec![2]);
        assert_eq!(segmented_sieve(3), vec![2, 3]);
        assert_eq!(segmented_sieve(4), vec![2, 3]);
    }

    #[test]
    fn test_small_primes() {
        assert_eq!(segmented_sieve(10), vec![2, 3, 5, 7]);
        assert_eq!(
            segmented_sieve(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(segmented_sieve(100).len(), 25);
        assert_eq!(segmented_sieve(1_000).len(), 168);
        assert_eq!(segmented_sieve(10_000).len(), 1_229);
        assert_eq!(segmented_sieve(100_000).len(), 9_592);
        assert_eq!(segmented_sieve(1_000_000).len(), 78_498);
    }

    #[test]
    fn test_matches_dense_sieve() {
        for n in 2..=2_000i64 {
            assert_eq!(segmented_sieve(n), base::sieve(n as u64), "Mismatch at n={}", n);
        }
        for n in [97, 1_000, 65_536, 100_000] {
            assert_eq!(segmented_sieve(n), base::sieve(n as u64), "Mismatch at n={}", n);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(segmented_sieve(123_457), segmented_sieve(123_457));
    }

    #[test]
    fn test_segment_limit() {
        assert_eq!(segment_limit(2), 2);
        assert_eq!(segment_limit(3), 2);
        assert_eq!(segment_limit(4), 3);
        assert_eq!(segment_limit(99), 10);
        assert_eq!(segment_limit(100), 11);
        assert_eq!(segment_limit(1_000_000), 1_001);
    }

    #[test]
    fn test_windows_small_n() {
        assert_eq!(windows(0).count(), 0);
        assert_eq!(windows(1).count(), 0);
        assert_eq!(windows(2).collect::<Vec<_>>(), vec![Window { low: 2, high: 3 }]);
        assert_eq!(windows(3).collect::<Vec<_>>(), vec![Window { low: 2, high: 4 }]);
    }

    #[test]
    fn test_windows_cover_range() {
        for n in [10u64, 30, 99, 100, 101, 1_000, 12_345] {
            let limit = segment_limit(n);
            let ws: Vec<Window> = windows(n).collect();

            assert_eq!(ws[0], Window { low: limit, high: (2 * limit).min(n + 1) });
            assert_eq!(ws.last().unwrap().high, n + 1);
            for pair in ws.windows(2) {
                assert_eq!(pair[0].high, pair[1].low, "gap at n={}", n);
            }
            for w in &ws {
                assert!(!w.is_empty());
                assert!(w.len() as u64 <= limit, "window wider than L at n={}", n);
            }
        }
    }

    #[test]
    fn test_window_edges_classified() {
        // n = 120: L = 11, windows [11,22) [22,33) ... [110,121)
        let base_primes = base::sieve(11);
        let mut buf = Vec::new();

        let w = Window { low: 11, high: 22 };
        let found: Vec<u64> = sieve_window(w, &base_primes, &mut buf).collect();
        // 11 is itself a base prime, so the window strikes it
        assert_eq!(found, vec![13, 17, 19]);

        let w = Window { low: 23, high: 30 };
        let found: Vec<u64> = sieve_window(w, &base_primes, &mut buf).collect();
        assert_eq!(found, vec![23, 29]);

        let w = Window { low: 110, high: 121 };
        let found: Vec<u64> = sieve_window(w, &base_primes, &mut buf).collect();
        assert_eq!(found, vec![113]);
        assert!(w.contains(120) && !w.contains(121));
    }

    #[test]
    fn test_buffer_reused() {
        let base_primes = base::sieve(11);
        let mut buf = Vec::with_capacity(11);
        let cap = buf.capacity();
        for w in windows(120) {
            let _ = sieve_window(w, &base_primes, &mut buf).count();
            assert!(buf.len() <= 11);
        }
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn test_prime_at_bound() {
        assert_eq!(*segmented_sieve(999_983).last().unwrap(), 999_983);
        assert_eq!(*segmented_sieve(1_000_000).last().unwrap(), 999_983);
    }
}
