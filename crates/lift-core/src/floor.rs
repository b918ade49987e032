//! The `Floor` newtype.
//!
//! Floors are 1-based.  The wrapper holds a signed integer so that raw
//! request input (which may be zero or negative) can be represented before
//! validation; range checks live in [`CarConfig::floor`][crate::CarConfig::floor],
//! not here.

use std::fmt;

/// A floor number.  Valid floors are `1..=total_floors`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Floor(pub i32);

impl Floor {
    /// The ground floor, where every car starts.
    pub const GROUND: Floor = Floor(1);

    /// The floor directly above.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below.
    #[inline]
    pub fn below(self) -> Floor {
        Floor(self.0 - 1)
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// `true` if `self` lies in the inclusive range spanned by `a` and `b`,
    /// in either order.
    #[inline]
    pub fn is_between(self, a: Floor, b: Floor) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo <= self && self <= hi
    }
}

impl Default for Floor {
    #[inline]
    fn default() -> Self {
        Self::GROUND
    }
}

impl From<i32> for Floor {
    #[inline]
    fn from(n: i32) -> Floor {
        Floor(n)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
