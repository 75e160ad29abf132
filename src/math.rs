//! Integer helpers shared by both sieve phases.

/// Integer square root, exact for every `u64`.
///
/// Seeds from `f64::sqrt` and then corrects with checked arithmetic, so the
/// result is `floor(sqrt(n))` even past the 2^52 mantissa limit.
#[inline]
pub fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

/// Over-estimate of π(n) for pre-allocating result vectors.
#[inline]
pub fn prime_count_upper(n: u64) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (nf / nf.ln() * 1.15) as usize + 1
}
