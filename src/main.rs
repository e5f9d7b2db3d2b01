//! # Main — CLI Entry Point
//!
//! Thin driver around the two sieve engines. The core library computes and
//! returns filled bit arrays; everything here — choosing bounds, driving the
//! chunk loop, printing the primes — is the external reporting collaborator.
//!
//! ## Subcommands
//!
//! - `primes`: run the base sieve and list the odd primes below a bound.
//! - `chunks`: run the base sieve, then sieve consecutive windows beyond its
//!   range in parallel and list each window's primes in order.
//!
//! ## Global Options
//!
//! - `--threads`: Rayon thread pool size (0 = all cores).
//! - `--quiet`: suppress the prime listing, log summary counts only.
//!
//! Logging goes to stderr via `tracing`; set `LOG_FORMAT=json` for
//! structured output. Listings go to stdout.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "oddsieve", about = "Bit-packed segmented sieve of Eratosthenes")]
struct Cli {
    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Suppress the prime listing; log summary counts only
    #[arg(long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sieve all odd candidates below a bound and list the primes
    Primes {
        /// Upper bound (exclusive) on candidate values
        #[arg(long, default_value_t = 1 << 14)]
        limit: u64,
    },
    /// Sieve windows beyond the base range using precomputed base primes
    Chunks {
        /// Candidate count of the base sieve (defaults to the smallest size
        /// that covers the requested windows)
        #[arg(long)]
        nbits: Option<usize>,

        /// Width of each chunk, in odd candidates
        #[arg(long, default_value_t = 1024)]
        chunk_bits: usize,

        /// Number of consecutive chunks to sieve
        #[arg(long, default_value_t = 4)]
        chunks: usize,

        /// First value of the first chunk (odd, beyond the base range;
        /// defaults to the first candidate past it)
        #[arg(long)]
        base: Option<u64>,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Structured logging: LOG_FORMAT=json for machines, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    match cli.command {
        Commands::Primes { limit } => cli::run_primes(limit, cli.quiet),
        Commands::Chunks {
            nbits,
            chunk_bits,
            chunks,
            base,
        } => cli::run_chunks(nbits, chunk_bits, chunks, base, cli.quiet),
    }
}
