//! Sieve benchmark harness
//! Compares: dense base sieve vs segmented sieve vs `primes` crate vs `primal` crate
//!
//! Usage: cargo run --release --bin sieve-bench

use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use segsieve::{segment_limit, segmented_sieve, sieve};

#[derive(Parser, Debug)]
#[command(name = "sieve-bench", about = "Time the segmented sieve against reference sieves")]
struct Args {
    /// Timed runs per implementation and bound
    #[arg(short, long, default_value_t = 25)]
    iters: usize,

    /// Largest bound to benchmark
    #[arg(long, default_value_t = 10_000_000)]
    max: u64,

    /// Skip the `primes` crate above this bound (its iterator is slow)
    #[arg(long, default_value_t = 1_000_000)]
    primes_crate_max: u64,
}

// ─── Wrappers ──────────────────────────────────────────────────────────────

fn dense(n: u64) -> Vec<u64> {
    sieve(n)
}

fn segmented(n: u64) -> Vec<u64> {
    segmented_sieve(n as i64)
}

fn primes_crate_sieve(n: u64) -> Vec<u64> {
    use primes::{PrimeSet, Sieve};
    let mut sieve = Sieve::new();
    sieve.iter().take_while(|&p| p <= n).collect()
}

fn primal_crate_sieve(n: u64) -> Vec<u64> {
    primal::Sieve::new(n as usize)
        .primes_from(0)
        .take_while(|&p| p <= n as usize)
        .map(|p| p as u64)
        .collect()
}

// ─── Measurement ───────────────────────────────────────────────────────────

struct Timing {
    name: &'static str,
    count: usize,
    min: Duration,
    median: Duration,
}

fn bench<F>(name: &'static str, n: u64, iters: usize, f: F) -> Timing
where
    F: Fn(u64) -> Vec<u64>,
{
    // warmup
    let _ = f(n);

    let mut times = Vec::with_capacity(iters);
    let mut count = 0;
    for _ in 0..iters {
        let t = Instant::now();
        let r = f(n);
        times.push(t.elapsed());
        count = r.len();
        std::hint::black_box(&r);
    }
    times.sort();

    Timing {
        name,
        count,
        min: times[0],
        median: times[times.len() / 2],
    }
}

fn format_dur(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.1} µs", ns as f64 / 1e3)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1e6)
    } else {
        format!("{:.2} s", ns as f64 / 1e9)
    }
}

fn format_commas(n: u64) -> String {
    let s = n.to_string();
    let mut r = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            r.push(',');
        }
        r.push(c);
    }
    r.chars().rev().collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(args.iters > 0, "--iters must be at least 1");

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let sizes: Vec<u64> = [10_000, 100_000, 1_000_000, 10_000_000, 100_000_000]
        .into_iter()
        .filter(|&n| n <= args.max)
        .collect();

    for n in sizes {
        let limit = segment_limit(n);
        println!(
            "┌─ n = {} ({} iters, window = {} flags) ───────────────",
            format_commas(n),
            args.iters,
            format_commas(limit)
        );
        println!("│  {:<24} │ {:>10} │ {:>10} │", "Implementation", "Min", "Median");

        let mut rows = vec![
            bench("dense", n, args.iters, dense),
            bench("segmented", n, args.iters, segmented),
            bench("primal (Sieve::new)", n, args.iters, primal_crate_sieve),
        ];
        if n <= args.primes_crate_max {
            rows.push(bench("primes crate (iter)", n, args.iters, primes_crate_sieve));
        }

        for row in &rows {
            println!(
                "│  {:<24} │ {:>10} │ {:>10} │ π = {}",
                row.name,
                format_dur(row.min),
                format_dur(row.median),
                format_commas(row.count as u64)
            );
        }

        let expected = rows[0].count;
        for row in &rows[1..] {
            ensure!(
                row.count == expected,
                "count mismatch at n={}: dense={} {}={}",
                n,
                expected,
                row.name,
                row.count
            );
        }
        println!("└─ counts agree ✓");
        println!();

        info!(
            n,
            dense_bytes = n + 1,
            window_bytes = limit,
            "sieve flag memory"
        );
    }

    Ok(())
}
