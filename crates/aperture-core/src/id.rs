//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a leaf pair within a field.
///
/// Pairs are numbered top-down in grid-row order; `PairId(0)` is the
/// outermost pair and corresponds to row 0 of the intensity grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub u32);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PairId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
