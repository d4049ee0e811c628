use num_bigint::BigInt;
use thiserror::Error;

/// Reasons a candidate chain cannot be constructed.
///
/// These describe structurally invalid input. A well-formed sequence that
/// simply is not a Cunningham chain is not an error; classification
/// reports it as a negative result instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Fewer than two values were supplied.
    #[error("chain too short: {len} value(s) given, at least 2 required")]
    TooShort { len: usize },

    /// A value below 1 was supplied. `index` is its position in the input.
    #[error("non-prime-eligible value {value} at position {index}")]
    NonPositive { index: usize, value: BigInt },

    /// A token could not be read as a decimal integer.
    #[error("invalid integer {token:?}")]
    InvalidInteger { token: String },
}
