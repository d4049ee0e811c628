//! Cunningham chain validation
//!
//! A Cunningham chain is a sequence of primes `p₁ … pₙ` linked by a fixed
//! recurrence:
//!
//! - **first kind**: `pᵢ₊₁ = 2pᵢ + 1` (each term but the last is a Sophie
//!   Germain prime, each term but the first a safe prime)
//! - **second kind**: `pᵢ₊₁ = 2pᵢ − 1`
//!
//! This module answers one question for a given sequence: is it a complete
//! Cunningham chain, and of which kind? It does not search for chains,
//! generate primes, or report valid sub-chains of a rejected sequence.
//!
//! # Workflow
//!
//! 1. **Construct** a [`CandidateChain`] from two or more positive integers.
//!    Malformed input is rejected here with a [`ChainError`].
//! 2. **Classify** it with a [`ChainValidator`]. The scan is fail-fast: it
//!    stops at the first candidate that is not prime or does not follow the
//!    recurrence fixed by the first two terms.
//! 3. **Query** the result through [`CandidateChain::kind`], which stays
//!    `None` until classification has run.
//!
//! A negative classification is an ordinary answer, not an error, so
//! "structurally invalid input" (`Err` at construction) and "valid input,
//! not a chain" (`false` from classification) never look alike.

mod candidate;
mod error;
mod kind;
mod validator;

pub use candidate::{Candidate, CandidateChain};
pub use error::ChainError;
pub use kind::Kind;
pub use validator::{Break, ChainValidator, Classification, Verdict};
