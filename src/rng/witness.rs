//! Miller–Rabin witness generator
//!
//! Random bases for the strong-probable-prime test are drawn from a
//! ChaCha20 keystream. The generator is seeded either from operating system
//! entropy or from an explicit 32-byte seed, in which case every witness it
//! produces is reproducible.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::os::sys_random;
use crate::rng::chacha20;

/// Deterministic random bit generator used to pick Miller–Rabin bases.
///
/// Output is produced in 64-byte ChaCha20 blocks. After each request the
/// generator replaces its key with fresh keystream, so earlier witnesses
/// cannot be recomputed from a later state.
pub struct WitnessRng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl WitnessRng {
    /// Seeds a generator from operating system entropy.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Seeds a generator from a caller-provided 32-byte seed.
    ///
    /// Two generators built from the same seed yield the same witness
    /// sequence.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with keystream bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let block = chacha20::block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// Sampling is by rejection: candidates are drawn with exactly as many
    /// bits as `bound` and discarded while they are not below it, so fewer
    /// than two draws are needed on average.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: &BigUint) -> BigUint {
        assert!(!bound.is_zero(), "sampling bound must be non-zero");

        let bits = bound.bits();
        let len = bits.div_ceil(8) as usize;
        let excess = (len as u64 * 8 - bits) as u32;
        let mut buf = vec![0u8; len];

        loop {
            self.fill_bytes(&mut buf);
            buf[0] &= 0xFF >> excess;

            let sample = BigUint::from_bytes_be(&buf);
            if &sample < bound {
                return sample;
            }
        }
    }

    /// Returns a Miller–Rabin base drawn uniformly from `[2, n − 2]`.
    ///
    /// # Panics
    /// Panics if `n < 5`, where that range is empty.
    pub fn base_for(&mut self, n: &BigUint) -> BigUint {
        assert!(*n >= BigUint::from(5u8), "no witness range below 5");

        self.below(&(n - BigUint::from(3u32))) + 2u32
    }

    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl Default for WitnessRng {
    fn default() -> Self {
        Self::from_os()
    }
}
