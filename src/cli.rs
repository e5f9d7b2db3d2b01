//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Resolves sieve
//! bounds, validates the segment preconditions at the trust boundary (the
//! library only debug-asserts them), drives the engines, and prints the
//! resulting primes to stdout — one per line, chunks in ascending order.
//!
//! Only odd primes are listed: the engines never store even values, and 2
//! is implicit. The sentinel value 1 is excluded by the library iterators.

use anyhow::{bail, Result};
use oddsieve::{base, segment};
use std::io::{BufWriter, Write};
use tracing::{info, warn};

/// Run the base sieve over all odd candidates below `limit` and list the
/// primes.
pub fn run_primes(limit: u64, quiet: bool) -> Result<()> {
    let nbits = (limit / 2) as usize;
    let result = base::run(nbits)?;
    info!(
        candidates = nbits,
        limit,
        primes = result.primes().count(),
        composites = result.bits().count_ones(),
        "base sieve complete"
    );

    if !quiet {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for p in result.primes() {
            writeln!(out, "{}", p)?;
        }
        out.flush()?;
    }
    Ok(())
}

/// Run the base sieve, then sieve `chunks` consecutive windows of
/// `chunk_bits` odd candidates each, starting at `base_value` (or at the
/// first candidate past the base range), and list each window's primes.
pub fn run_chunks(
    nbits: Option<usize>,
    chunk_bits: usize,
    chunks: usize,
    base_value: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let total_bits = chunk_bits as u64 * chunks as u64;

    let nbits = match (nbits, base_value) {
        (Some(n), _) => n,
        (None, Some(b)) => {
            // smallest base sieve whose range reaches past the square root
            // of the last candidate
            let high = b
                .checked_add(2 * total_bits)
                .ok_or_else(|| anyhow::anyhow!("window end overflows u64"))?;
            (high.saturating_sub(2).isqrt() / 2 + 1) as usize
        }
        // windows start right after the base range, so the range itself
        // must stretch past sqrt(2 * total_bits)
        (None, None) => ((total_bits as f64).sqrt().ceil() as usize).max(16),
    };

    let base_result = base::run(nbits)?;
    let start = base_value.unwrap_or_else(|| base_result.limit());

    if start % 2 == 0 {
        bail!("--base must be odd, got {}", start);
    }
    if start < base_result.limit() {
        bail!(
            "--base {} lies inside the base sieve range (first uncovered candidate is {})",
            start,
            base_result.limit()
        );
    }
    let high = start
        .checked_add(2 * total_bits)
        .ok_or_else(|| anyhow::anyhow!("window end overflows u64"))?;
    let needed = high.saturating_sub(2).isqrt();
    if total_bits > 0 && !base_result.covers(needed) {
        bail!(
            "base sieve of {} candidates covers primes below {}, but windows up to {} need primes up to {}",
            nbits,
            base_result.limit(),
            high,
            needed
        );
    }

    info!(
        candidates = nbits,
        base_primes = base_result.primes().count(),
        start,
        chunks,
        chunk_bits,
        "base sieve complete, fanning out chunks"
    );

    let bases: Vec<u64> = (0..chunks as u64)
        .map(|k| start + 2 * chunk_bits as u64 * k)
        .collect();
    let segments = segment::run_batch(&base_result, chunk_bits, &bases)?;

    let found: usize = segments.iter().map(|s| s.bits().count_zeros()).sum();
    info!(found, "segment sieve complete");

    if !quiet {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for seg in &segments {
            for p in seg.primes() {
                writeln!(out, "{}", p)?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

/// Configure the global Rayon pool used for chunk fan-out. 0 or absent
/// means all logical cores.
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if num_threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure rayon thread pool");
        } else {
            info!(threads = num_threads, "Rayon thread pool configured");
        }
    }
}
