//! Cunningham chain validation for arbitrary-precision integers
//!
//! This crate decides whether a sequence of positive integers is a
//! Cunningham chain of the first kind (`pᵢ₊₁ = 2pᵢ + 1`) or second kind
//! (`pᵢ₊₁ = 2pᵢ − 1`), with every term prime.
//!
//! # Module overview
//!
//! - `chain`  
//!   Candidate chains and their classification. Construction validates the
//!   input shape (at least two values, all positive) and sorts it;
//!   classification runs a fail-fast scan that checks each candidate for
//!   primality and for the recurrence fixed by the first two terms.
//!
//! - `primality`  
//!   The primality oracle consumed by `chain`. A randomized Miller–Rabin
//!   test with a configurable round count bounds the false-positive
//!   probability at `4^(-rounds)`; any other oracle can be plugged in
//!   through the `PrimalityOracle` trait.
//!
//! - `rng`  
//!   ChaCha20-based generator of Miller–Rabin bases, seeded from the
//!   operating system or from a fixed seed for reproducible runs.
//!
//! # Example
//!
//! ```
//! use primechain::chain::{CandidateChain, Kind};
//!
//! let mut chain = CandidateChain::new([47, 23, 11, 5, 2]).unwrap();
//! assert!(chain.is_cunningham_chain());
//! assert_eq!(chain.kind(), Some(Kind::First));
//! ```
//!
//! # Non-goals
//!
//! - No prime generation or chain search
//! - No deterministic primality proofs
//! - No reporting of valid sub-chains inside a rejected sequence

mod os;

pub mod chain;
pub mod primality;
pub mod rng;
