//! # Segment Sieve — Windows Beyond the Base Range
//!
//! Marks composites in a window of odd integers `[base, base + 2*chunk_bits)`
//! using only the primes already found by the base sieve, so the window can
//! sit arbitrarily far out without a bit array covering everything below it.
//!
//! ## Offset computation
//!
//! For each base prime `p`, the first candidate to strike is the first
//! multiple of `p` at or after `base` that is also odd. The negative residue
//! `r = (p - base % p) % p` gives the distance to the next multiple, but
//! `base + r` can land on an even integer, which has no bit slot; when `r`
//! is odd the correction adds one more `p` stride (odd + odd = even
//! distance) to select the next *odd* multiple instead. Halving the adjusted
//! distance converts it to the segment's index space, and from there the
//! stride is simply `p` (consecutive odd multiples of `p` are `2p` apart in
//! value, `p` apart in index space).
//!
//! Primes whose square is at or past the window's end are never consulted:
//! any multiple of theirs inside the window has a smaller prime factor that
//! already struck it. This cutoff also means a prime `base` never strikes
//! itself.
//!
//! ## Precondition
//!
//! `base_result` must contain every prime up to the square root of the last
//! candidate, and the window must lie beyond the base sieve's own range
//! (`base` odd, `base >= base_result.limit()`). This is a caller
//! responsibility: it is checked by debug assertions only, and a release
//! build given an under-covered base result silently produces an
//! under-marked segment.

use rayon::prelude::*;

use crate::base::BaseResult;
use crate::bitsieve::BitSieve;
use crate::error::SieveError;

/// A sieved window of `chunk_bits` odd candidates starting at `base`: bit
/// `j` is set iff `base + 2j` is composite. Exclusively owned by the caller.
pub struct Segment {
    bits: BitSieve,
    base: u64,
}

/// Distance from `x` up to the next multiple of `p` (0 if `x` is one).
#[inline]
fn negmodp(x: u64, p: u64) -> u64 {
    let r = x % p;
    if r == 0 {
        0
    } else {
        p - r
    }
}

/// Sieve the window of odd integers `[base, base + 2*chunk_bits)`.
///
/// `base` must be odd and at least `base_result.limit()`, and `base_result`
/// must cover every prime up to the square root of the window's last
/// candidate — see the module docs. The only runtime failure is allocation.
pub fn run(
    base_result: &BaseResult,
    chunk_bits: usize,
    base: u64,
) -> Result<Segment, SieveError> {
    let mut bits = BitSieve::new(chunk_bits)?;
    if chunk_bits == 0 {
        return Ok(Segment { bits, base });
    }

    debug_assert!(base % 2 == 1, "segment base must be odd, got {}", base);
    debug_assert!(
        base >= base_result.limit(),
        "segment [{}, ...) overlaps the base sieve range (limit {})",
        base,
        base_result.limit()
    );

    // exclusive upper bound of the window in value space
    let high = base.saturating_add(2 * chunk_bits as u64);
    debug_assert!(
        base_result.covers((high - 2).isqrt()),
        "base sieve covers primes below {} but the window up to {} needs {}",
        base_result.limit(),
        high,
        (high - 2).isqrt()
    );

    for p in base_result.primes() {
        if p.saturating_mul(p) >= high {
            break;
        }
        let mut r = negmodp(base, p);
        if r % 2 == 1 {
            // base + r is even and has no slot; the next odd multiple of p
            // is one stride further
            r += p;
        }
        let mut q = (r / 2) as usize;
        while q < chunk_bits {
            bits.set(q);
            q += p as usize;
        }
    }

    Ok(Segment { bits, base })
}

/// Sieve one window per entry of `bases`, in parallel.
///
/// Each worker reads the shared immutable `base_result` and writes its own
/// segment, so no synchronization is needed; the output preserves the input
/// order. Same preconditions as [`run`], per window.
pub fn run_batch(
    base_result: &BaseResult,
    chunk_bits: usize,
    bases: &[u64],
) -> Result<Vec<Segment>, SieveError> {
    bases
        .par_iter()
        .map(|&base| run(base_result, chunk_bits, base))
        .collect()
}

impl Segment {
    /// The odd integer represented by bit 0.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Window width in candidates.
    #[inline]
    pub fn chunk_bits(&self) -> usize {
        self.bits.len()
    }

    /// The underlying bit array.
    #[inline]
    pub fn bits(&self) -> &BitSieve {
        &self.bits
    }

    /// Value represented by bit `j`: `base + 2j`.
    #[inline]
    pub fn value(&self, j: usize) -> u64 {
        self.base + 2 * j as u64
    }

    /// Ascending iterator over the primes in this window.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.bits.iter_zeros().map(move |j| self.value(j))
    }
}
