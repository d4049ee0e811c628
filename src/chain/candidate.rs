use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use tracing::warn;

use crate::chain::error::ChainError;
use crate::chain::kind::Kind;
use crate::chain::validator::ChainValidator;

/// One member of a candidate chain.
///
/// `is_prime` starts out `false` and is set by classification once the
/// value has passed its primality test and, past the first position, the
/// recurrence check against its predecessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub(crate) value: BigUint,
    pub(crate) is_prime: bool,
}

impl Candidate {
    /// The candidate's integer value.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Whether the last classification confirmed this candidate.
    ///
    /// `false` both for candidates that failed and for candidates the scan
    /// never reached.
    pub fn is_prime(&self) -> bool {
        self.is_prime
    }
}

/// A sequence of positive integers that may or may not be a Cunningham
/// chain.
///
/// Membership is fixed at construction: values are sorted into
/// non-decreasing order and never added, removed or changed afterwards.
/// Duplicates are accepted here and rejected by classification, since no
/// value `p ≥ 1` equals `2p ± 1` except `p = 1`, which is not prime. Classification only touches
/// the per-candidate `is_prime` flags, the chain's [`Kind`] and its
/// `checked` flag.
///
/// # Ownership
///
/// Classification takes `&mut CandidateChain`, so a chain cannot be read
/// while it is being classified or classified from two threads at once.
/// Share it (`&CandidateChain`, `Arc<CandidateChain>`) only after
/// classification has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateChain {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) kind: Kind,
    pub(crate) checked: bool,
}

impl CandidateChain {
    /// Builds a chain from at least two positive integers.
    ///
    /// Values may arrive in any order and are stored in non-decreasing
    /// order; repeated values are kept. No primality testing happens here.
    ///
    /// # Errors
    ///
    /// - [`ChainError::TooShort`] if fewer than two values are given.
    /// - [`ChainError::NonPositive`] if any value is below 1.
    pub fn new<I, T>(values: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let values: Vec<BigInt> = values.into_iter().map(Into::into).collect();

        if values.len() < 2 {
            return Err(ChainError::TooShort { len: values.len() });
        }

        let mut naturals = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match value.to_biguint() {
                Some(n) if n >= BigUint::from(1u32) => naturals.push(n),
                _ => return Err(ChainError::NonPositive { index, value }),
            }
        }

        naturals.sort_unstable();

        Ok(Self {
            candidates: naturals
                .into_iter()
                .map(|value| Candidate {
                    value,
                    is_prime: false,
                })
                .collect(),
            kind: Kind::NotAChain,
            checked: false,
        })
    }

    /// Builds a chain from decimal integers separated by commas and/or
    /// whitespace, e.g. `"2, 5, 11"` or `"89 179 359"`.
    ///
    /// # Errors
    ///
    /// [`ChainError::InvalidInteger`] for the first token that is not a
    /// decimal integer, then the same errors as [`CandidateChain::new`].
    pub fn parse(input: &str) -> Result<Self, ChainError> {
        let values = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<BigInt>().map_err(|_| ChainError::InvalidInteger {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(values)
    }

    /// Candidates in ascending order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates, at least 2.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false`: a chain holds at least two candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether classification has run at least once.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The kind found by the last classification.
    ///
    /// Returns `None` if the chain has never been classified, so an
    /// unclassified chain cannot be mistaken for [`Kind::NotAChain`].
    pub fn kind(&self) -> Option<Kind> {
        if !self.checked {
            warn!(chain = %self, "kind of an unclassified chain was queried");
            return None;
        }

        Some(self.kind)
    }

    /// Index of the last candidate in the confirmed prefix.
    ///
    /// After a failed classification this points just before the candidate
    /// that broke the chain. `None` if not even the first candidate was
    /// confirmed.
    pub fn last_confirmed(&self) -> Option<usize> {
        self.candidates
            .iter()
            .take_while(|c| c.is_prime)
            .count()
            .checked_sub(1)
    }

    /// Classifies the chain with a default [`ChainValidator`].
    pub fn is_cunningham_chain(&mut self) -> bool {
        ChainValidator::new().classify(self)
    }

    pub(crate) fn reset(&mut self) {
        self.kind = Kind::NotAChain;
        self.candidates.iter_mut().for_each(|c| c.is_prime = false);
    }
}

impl FromStr for CandidateChain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for CandidateChain {
    /// Formats the values as `2, 5, 11`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{}", candidate.value)?;
        }

        Ok(())
    }
}
