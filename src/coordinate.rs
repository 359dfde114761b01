//! Node addressing.

use std::fmt;

/// The address of a node: its depth and its rank among all nodes of that
/// depth.
///
/// A coordinate names a node only until the next structural mutation.
/// Inserting or removing a node can shift the ranks of later nodes in the
/// same row, so coordinates must not be stored as identities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub level: usize,
    pub sibling: usize,
}

impl Coordinate {
    /// The root is always at `(0, 0)`.
    pub const ROOT: Coordinate = Coordinate { level: 0, sibling: 0 };

    pub const fn new(level: usize, sibling: usize) -> Coordinate {
        return Coordinate { level, sibling };
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((level, sibling): (usize, usize)) -> Self {
        return Coordinate { level, sibling };
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.level, self.sibling)
    }
}
