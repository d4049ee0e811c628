//! Configuration for the Miller–Rabin oracle.

use thiserror::Error;

/// Parameters controlling probabilistic primality testing.
///
/// # Confidence
///
/// Each Miller–Rabin round draws its own uniform base and lets a composite
/// through with probability at most 1/4, independently of the others. A
/// base-2 check runs first but is not a round. With `rounds = k` the
/// false-positive probability per candidate is therefore bounded by
/// `4^(-k)`:
///
/// | rounds | bound   |
/// |--------|---------|
/// | 5      | 2⁻¹⁰    |
/// | 20     | 2⁻⁴⁰    |
/// | 64     | 2⁻¹²⁸   |
///
/// Small candidates (below 65 536) are decided exactly by trial division and
/// never consume rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimalityParams {
    /// Number of Miller–Rabin rounds per candidate (`1..=1000`).
    pub rounds: u32,
    /// Fixed seed for witness selection.
    ///
    /// `None` seeds from operating system entropy. `Some` makes every
    /// primality decision reproducible.
    pub seed: Option<[u8; 32]>,
}

/// Errors raised when validating [`PrimalityParams`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimalityParamError {
    /// At least one round is required for any confidence at all.
    #[error("at least one Miller-Rabin round is required")]
    TooFewRounds,
    /// More rounds than the accepted maximum were requested.
    #[error("{rounds} Miller-Rabin rounds requested, at most {max} are accepted", max = PrimalityParams::MAX_ROUNDS)]
    TooManyRounds { rounds: u32 },
}

impl PrimalityParams {
    /// Default round count, a false-positive bound of 2⁻⁴⁰.
    pub const DEFAULT_ROUNDS: u32 = 20;

    /// Upper limit on `rounds`.
    pub const MAX_ROUNDS: u32 = 1000;

    /// Default parameters with a fixed witness seed.
    pub fn seeded(seed: [u8; 32]) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PrimalityParamError> {
        if self.rounds < 1 {
            return Err(PrimalityParamError::TooFewRounds);
        }

        if self.rounds > Self::MAX_ROUNDS {
            return Err(PrimalityParamError::TooManyRounds {
                rounds: self.rounds,
            });
        }

        Ok(())
    }
}

impl Default for PrimalityParams {
    /// 20 rounds, witnesses seeded from the operating system.
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            seed: None,
        }
    }
}
