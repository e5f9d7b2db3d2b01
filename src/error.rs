//! Error types shared by the sieve engines.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors surfaced by sieve construction.
///
/// Out-of-bounds bit access is a contract violation and panics rather than
/// returning a variant here. A segment computed from a base result that does
/// not cover enough primes is not detected at runtime either — that
/// precondition is documented on [`crate::segment::run`] and checked with a
/// debug assertion only.
#[derive(Debug, Error)]
pub enum SieveError {
    /// Backing storage for a bit array could not be obtained. Fatal: the
    /// computation cannot proceed without it, and retrying is meaningless.
    #[error("failed to allocate a {bits}-bit sieve")]
    Allocation {
        bits: usize,
        #[source]
        source: TryReserveError,
    },
}
