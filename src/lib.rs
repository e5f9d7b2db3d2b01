//! # oddsieve — Segmented Bit-Packed Sieve of Eratosthenes
//!
//! Computes prime numbers in two cooperating stages:
//!
//! 1. **Base sieve** ([`base::run`]): finds every prime among the odd
//!    integers below a fixed bound, stored one bit per candidate.
//! 2. **Segment sieve** ([`segment::run`]): reuses the base primes to mark
//!    composites in disjoint windows beyond the base range, so a run can
//!    reach arbitrarily far without ever allocating a bit array for the
//!    full range.
//!
//! Only odd integers are represented: bit index `i` stands for the value
//! `2i + 1`, halving storage versus a dense bit-per-integer layout. Even
//! numbers above 2 are composite and never stored; 2 itself is implicit.
//!
//! Both engines are pure functions over their inputs — no cross-call state.
//! Segments only read the shared [`base::BaseResult`] and write their own
//! buffer, so any number of them can be sieved in parallel
//! ([`segment::run_batch`]).

pub mod base;
pub mod bitsieve;
pub mod error;
pub mod segment;

/// Value of the odd integer represented by bit index `i`.
#[inline]
pub fn index_to_value(i: usize) -> u64 {
    2 * i as u64 + 1
}

/// Bit index of the odd integer `v`. Valid only for odd `v`.
#[inline]
pub fn value_to_index(v: u64) -> usize {
    debug_assert!(v % 2 == 1, "only odd values have a bit index, got {}", v);
    ((v - 1) / 2) as usize
}
