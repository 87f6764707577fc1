//! Key hashing and bucket indexing.
//!
//! A key goes through two stages before it selects a bucket:
//!
//! 1. A primary hash from the map's [`BuildHasher`].
//! 2. [`mix`], which folds high bits into low bits.
//!
//! The bucket array is always a power of two long, so the index is the mixed
//! hash masked with `array_size - 1`. Masking only looks at the low bits, which
//! is why the second stage matters for weak primary hashes such as
//! [`Polynomial31`].

use core::hash::{BuildHasher, Hasher};

/// Default primary hasher: foldhash with a fixed seed.
pub use foldhash::fast::FixedState as DefaultHashBuilder;

/// Supplemental hash that spreads entropy from the high bits into the low bits.
///
/// The 64-bit primary hash is first folded to 32 bits, so every input bit
/// can reach the 32-bit mixer and, through it, the low bits used for masking.
#[inline(always)]
pub fn mix(hash: u64) -> u64 {
    let mut h = (hash ^ (hash >> 32)) as u32;
    h ^= (h >> 20) ^ (h >> 12);
    u64::from(h ^ (h >> 7) ^ (h >> 4))
}

/// Smallest power of two that is `>= capacity`, or `None` if it overflows.
#[inline]
pub fn array_size_for(capacity: usize) -> Option<usize> {
    capacity.checked_next_power_of_two()
}

/// Maps a mixed hash onto `[0, mask]`.
#[inline(always)]
pub fn index_for(mixed: u64, mask: usize) -> usize {
    (mixed as usize) & mask
}

/// Builder for [`PolynomialHasher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polynomial31;

impl BuildHasher for Polynomial31 {
    type Hasher = PolynomialHasher;

    #[inline]
    fn build_hasher(&self) -> PolynomialHasher {
        PolynomialHasher::default()
    }
}

/// The `h = 31 * h + b` rolling string hash.
///
/// Deterministic across runs and platforms, but keys that share a prefix land
/// close together and the low bits carry little entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialHasher {
    state: u64,
}

impl Hasher for PolynomialHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = self.state.wrapping_mul(31).wrapping_add(u64::from(b));
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}
