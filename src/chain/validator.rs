use std::fmt::{Display, Formatter, Result};

use num_bigint::{BigInt, BigUint};
use tracing::{debug, trace};

use crate::chain::candidate::CandidateChain;
use crate::chain::error::ChainError;
use crate::chain::kind::Kind;
use crate::primality::{MillerRabin, PrimalityOracle, PrimalityParamError, PrimalityParams};

/// Why a candidate chain was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Break {
    /// The candidate failed its primality test.
    NotPrime,
    /// The candidate is not `2p + 1` (or `2p − 1`) of its predecessor.
    NoRecurrence,
}

impl Display for Break {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Break::NotPrime => "not prime",
            Break::NoRecurrence => "breaks the recurrence",
        })
    }
}

/// Outcome of scanning a chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every candidate is prime and follows the recurrence.
    Chain,
    /// Scanning stopped at `index`; later candidates were not examined.
    Broken { index: usize, reason: Break },
}

/// Result of [`ChainValidator::diagnose`].
///
/// `kind` is [`Kind::NotAChain`] whenever `verdict` is [`Verdict::Broken`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: Kind,
    pub verdict: Verdict,
}

impl Classification {
    /// `true` if every candidate passed, i.e. the verdict is [`Verdict::Chain`].
    pub fn is_chain(&self) -> bool {
        self.verdict == Verdict::Chain
    }
}

/// Classifies candidate chains as Cunningham chains of the first or second
/// kind.
///
/// Primality is delegated to a [`PrimalityOracle`], by default a
/// [`MillerRabin`] oracle with [`PrimalityParams::default`].
pub struct ChainValidator<O = MillerRabin> {
    oracle: O,
}

impl ChainValidator<MillerRabin> {
    /// Validator backed by a default Miller–Rabin oracle.
    pub fn new() -> Self {
        Self {
            oracle: MillerRabin::new(),
        }
    }

    /// Validator backed by a Miller–Rabin oracle built from `params`.
    ///
    /// # Errors
    /// Returns an error if `params` fails validation.
    pub fn with_params(params: PrimalityParams) -> std::result::Result<Self, PrimalityParamError> {
        Ok(Self {
            oracle: MillerRabin::with_params(params)?,
        })
    }
}

impl Default for ChainValidator<MillerRabin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: PrimalityOracle> ChainValidator<O> {
    /// Validator backed by a caller-supplied oracle.
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// The oracle answering primality queries.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Consumes the validator and returns its oracle.
    pub fn into_oracle(self) -> O {
        self.oracle
    }

    /// Same as [`CandidateChain::new`].
    pub fn construct<I, T>(&self, values: I) -> std::result::Result<CandidateChain, ChainError>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        CandidateChain::new(values)
    }

    /// Returns `true` if `chain` is a Cunningham chain.
    ///
    /// On return the chain is marked checked, its kind is set (or left at
    /// [`Kind::NotAChain`] on a negative result) and every candidate confirmed
    /// before the scan stopped has its `is_prime` flag set.
    pub fn classify(&mut self, chain: &mut CandidateChain) -> bool {
        self.diagnose(chain).is_chain()
    }

    /// Classifies `chain` and reports where it broke, if it did.
    ///
    /// Has exactly the side effects of [`ChainValidator::classify`].
    pub fn diagnose(&mut self, chain: &mut CandidateChain) -> Classification {
        chain.checked = true;
        chain.reset();

        debug!(len = chain.len(), "classifying candidate chain");

        let verdict = self.scan(chain);

        match verdict {
            Verdict::Chain => {
                debug!(kind = %chain.kind, "candidate chain is a Cunningham chain");
            }
            Verdict::Broken { index, reason } => {
                chain.kind = Kind::NotAChain;
                debug!(
                    index,
                    value = %chain.candidates[index].value,
                    %reason,
                    "candidate breaks the chain"
                );
            }
        }

        Classification {
            kind: chain.kind,
            verdict,
        }
    }

    fn scan(&mut self, chain: &mut CandidateChain) -> Verdict {
        let candidates = &mut chain.candidates;

        if !self.is_prime(&candidates[0].value) {
            return Verdict::Broken {
                index: 0,
                reason: Break::NotPrime,
            };
        }
        candidates[0].is_prime = true;

        let kind = Kind::linking(&candidates[0].value, &candidates[1].value);
        if kind == Kind::NotAChain {
            return Verdict::Broken {
                index: 1,
                reason: Break::NoRecurrence,
            };
        }
        chain.kind = kind;

        if !self.is_prime(&candidates[1].value) {
            return Verdict::Broken {
                index: 1,
                reason: Break::NotPrime,
            };
        }
        candidates[1].is_prime = true;

        for index in 2..candidates.len() {
            if !self.is_prime(&candidates[index].value) {
                return Verdict::Broken {
                    index,
                    reason: Break::NotPrime,
                };
            }

            let expected = kind.successor(&candidates[index - 1].value);
            if expected.as_ref() != Some(&candidates[index].value) {
                return Verdict::Broken {
                    index,
                    reason: Break::NoRecurrence,
                };
            }

            candidates[index].is_prime = true;
        }

        Verdict::Chain
    }

    fn is_prime(&mut self, n: &BigUint) -> bool {
        let prime = self.oracle.is_probable_prime(n);
        trace!(%n, prime, "primality test");

        prime
    }
}
