use std::fmt::{Display, Formatter, Result};

use num_bigint::BigUint;
use num_traits::{CheckedSub, One};

/// Classification of a candidate chain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Not a Cunningham chain of either kind.
    #[default]
    NotAChain,
    /// Every term is `2p + 1` of its predecessor.
    First,
    /// Every term is `2p − 1` of its predecessor.
    Second,
}

impl Kind {
    /// The term that must follow `p` in a chain of this kind.
    ///
    /// Returns `None` for [`Kind::NotAChain`], and for `p = 0` in the second kind
    /// where `2p − 1` would be negative.
    pub fn successor(self, p: &BigUint) -> Option<BigUint> {
        let doubled = p << 1u32;

        match self {
            Kind::NotAChain => None,
            Kind::First => Some(doubled + 1u32),
            Kind::Second => doubled.checked_sub(&BigUint::one()),
        }
    }

    /// Determines which recurrence, if any, links `p` to `q`.
    ///
    /// At most one kind can match since `2p + 1` and `2p − 1` differ.
    pub fn linking(p: &BigUint, q: &BigUint) -> Kind {
        [Kind::First, Kind::Second]
            .into_iter()
            .find(|kind| kind.successor(p).as_ref() == Some(q))
            .unwrap_or(Kind::NotAChain)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Kind::NotAChain => "not a chain",
            Kind::First => "first kind",
            Kind::Second => "second kind",
        })
    }
}
