//! Seedable random source for the weighted-random voting system.
//!
//! The generator is ChaCha20 seeded from a single `u64` (little-endian bytes in the first 8
//! positions of the 32-byte seed, the rest zero) so a logged seed replays a draw exactly.

use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

/// ChaCha20 stream built from a 64-bit seed.
#[derive(Debug, Clone)]
pub struct ElectionRng {
    rng : ChaCha20Rng,
    seed : u64,
}

impl ElectionRng {
    /// Seeds the stream from a 64-bit value, so equal seeds give equal draws.
    pub fn from_seed_u64(seed : u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        ElectionRng {
            rng : ChaCha20Rng::from_seed(seed32),
            seed,
        }
    }

    /// Seeds from operating system entropy. The chosen seed is available through `seed` so it can
    /// be reported and replayed.
    pub fn from_os_entropy() -> Self {
        ElectionRng::from_seed_u64(OsRng.next_u64())
    }

    /// The seed the stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for ElectionRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest : &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest : &mut [u8]) -> Result<(), rand_core::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Unbiased integer in `[0, n)`, or `None` if `n == 0`.
///
/// Rejection sampling: with `threshold = 2^64 mod n`, a word `x >= threshold` is accepted and
/// `x % n` is then uniform.
pub fn uniform_below<R : RngCore + ?Sized>(rng : &mut R, n : u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    let threshold = n.wrapping_neg() % n;
    loop {
        let x = rng.next_u64();
        if x >= threshold {
            return Some(x % n);
        }
    }
}
