//! Random witness generation
//!
//! Probabilistic primality testing needs a stream of random bases. This
//! module provides a ChaCha20-based generator for them, seeded from the
//! operating system or from a fixed seed when classification must be
//! reproducible.

mod chacha20;
mod witness;

/// Seedable generator of Miller–Rabin bases.
pub use witness::WitnessRng;
