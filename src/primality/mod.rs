//! Probabilistic primality testing
//!
//! Chain classification never decides primality itself; it asks a
//! [`PrimalityOracle`]. The crate ships one oracle, [`MillerRabin`], whose
//! confidence is set through [`PrimalityParams`].
//!
//! A custom oracle (a deterministic proof, a lookup table, a counting
//! double in tests) only has to implement the trait.

mod miller_rabin;
mod params;

use num_bigint::BigUint;

pub use miller_rabin::MillerRabin;
pub use params::{PrimalityParamError, PrimalityParams};

/// Source of primality decisions for chain classification.
pub trait PrimalityOracle {
    /// Returns `true` if `n` is (probably) prime.
    ///
    /// Takes `&mut self` so that randomized oracles can advance their
    /// witness generator.
    fn is_probable_prime(&mut self, n: &BigUint) -> bool;
}

impl<O: PrimalityOracle + ?Sized> PrimalityOracle for &mut O {
    fn is_probable_prime(&mut self, n: &BigUint) -> bool {
        (**self).is_probable_prime(n)
    }
}
