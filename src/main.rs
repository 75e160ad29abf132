//! Count (and optionally print) the primes up to `N`.
//!
//! Usage: segsieve [N] [--print] [--verify] [-v]

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Segmented Sieve of Eratosthenes
#[derive(Parser, Debug)]
#[command(name = "segsieve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inclusive upper bound; values <= 1 yield no primes
    #[arg(value_name = "N", default_value_t = 1_000_000, allow_negative_numbers = true)]
    n: i64,

    /// Print every prime, one per line
    #[arg(long)]
    print: bool,

    /// Cross-check the result against the primal crate
    #[arg(long)]
    verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log every window swept
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.trace {
        Level::TRACE
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let start = Instant::now();
    let primes = segsieve::segmented_sieve(cli.n);
    info!(n = cli.n, count = primes.len(), elapsed = ?start.elapsed(), "sieve complete");

    if cli.verify {
        let count = segsieve::verify(cli.n)?;
        info!(count, "matches primal");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.print {
        for p in &primes {
            writeln!(out, "{}", p)?;
        }
    }
    writeln!(out, "primes up to {}: {}", cli.n, primes.len())?;
    out.flush()?;

    Ok(())
}
