//! Miller–Rabin probable-prime test over `BigUint`.
//!
//! Candidates go through three stages:
//!
//! 1. Values below 65 536 are decided exactly by trial division.
//! 2. Larger values are rejected early if any prime below 256 divides them.
//! 3. Survivors must pass a base-2 strong-probable-prime check, which
//!    weeds out most composites cheaply but is not counted as a round.
//! 4. They then run `rounds` strong-probable-prime tests, each with a base
//!    drawn uniformly from `[2, n − 2]`.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use crate::primality::params::{PrimalityParamError, PrimalityParams};
use crate::primality::PrimalityOracle;
use crate::rng::WitnessRng;

/// Every prime below 256.
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Below 256², any composite has a prime factor in `SMALL_PRIMES`.
const EXACT_LIMIT: u32 = 256 * 256;

/// Randomized Miller–Rabin primality oracle.
pub struct MillerRabin {
    rounds: u32,
    rng: WitnessRng,
}

impl MillerRabin {
    /// Oracle with [`PrimalityParams::default`].
    pub fn new() -> Self {
        Self {
            rounds: PrimalityParams::DEFAULT_ROUNDS,
            rng: WitnessRng::from_os(),
        }
    }

    /// Oracle with explicit parameters.
    ///
    /// # Errors
    /// Returns an error if `params` fails validation.
    pub fn with_params(params: PrimalityParams) -> Result<Self, PrimalityParamError> {
        params.validate()?;

        let rng = match params.seed {
            Some(seed) => WitnessRng::from_seed(seed),
            None => WitnessRng::from_os(),
        };

        Ok(Self {
            rounds: params.rounds,
            rng,
        })
    }

    /// Configured number of rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns `true` if `n` is probably prime.
    ///
    /// A `false` answer is always correct. A `true` answer for a composite
    /// happens with probability at most `4^(-rounds)`: the base-2 check
    /// does not count as a round, and every counted round uses a fresh
    /// uniform base.
    pub fn test(&mut self, n: &BigUint) -> bool {
        if let Some(small) = n.to_u32().filter(|&v| v < EXACT_LIMIT) {
            return is_small_prime(small);
        }

        if let Some(&p) = SMALL_PRIMES.iter().find(|&&p| (n % p).is_zero()) {
            trace!(factor = p, "small factor found");
            return false;
        }

        let n_minus_one = n - BigUint::one();
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> s;

        let two = BigUint::from(2u32);
        if !is_strong_probable_prime(n, &n_minus_one, &d, s, &two) {
            trace!("base 2 witnesses compositeness");
            return false;
        }

        for round in 0..self.rounds {
            let base = self.rng.base_for(n);

            if !is_strong_probable_prime(n, &n_minus_one, &d, s, &base) {
                trace!(round, %base, "compositeness witness found");
                return false;
            }
        }

        true
    }
}

impl Default for MillerRabin {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimalityOracle for MillerRabin {
    fn is_probable_prime(&mut self, n: &BigUint) -> bool {
        self.test(n)
    }
}

fn is_small_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }

    SMALL_PRIMES
        .iter()
        .take_while(|&&p| p * p <= n)
        .all(|&p| n % p != 0)
}

/// One strong-probable-prime round, with `n − 1 = d · 2^s` and `d` odd.
fn is_strong_probable_prime(
    n: &BigUint,
    n_minus_one: &BigUint,
    d: &BigUint,
    s: u64,
    base: &BigUint,
) -> bool {
    let mut x = base.modpow(d, n);

    if x.is_one() || x == *n_minus_one {
        return true;
    }

    for _ in 1..s {
        x = &x * &x % n;

        if x == *n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }

    false
}
