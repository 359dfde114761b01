//! Errors raised by the matrix, its rows, and the nested-list codec.

use std::ops::Range;

use crate::coordinate::Coordinate;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong when addressing or reshaping a tree.
///
/// No operation partially applies before returning one of these: the tree is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The level is at or beyond the tree's height.
    #[error("no such level: {level} (tree height is {height})")]
    NoSuchLevel { level: usize, height: usize },

    /// The level exists but has no node at this rank.
    #[error("no such sibling: {at} (row holds {len} nodes)")]
    NoSuchSibling { at: Coordinate, len: usize },

    /// Only leaves may be removed.
    #[error("cannot remove {at}: node has {children} children")]
    HasChildren { at: Coordinate, children: usize },

    /// A node was asked to forget a child it never recorded.
    #[error("child {child} is not recorded in child range {range:?}")]
    ChildNotFound { child: usize, range: Range<usize> },

    /// A nested list does not describe a tree.
    #[error("malformed tree encoding: {0}")]
    MalformedEncoding(MalformedReason),

    /// A structural invariant does not hold. Only `validate` reports this.
    #[error("corrupted tree at {at}: {reason}")]
    Corrupted { at: Coordinate, reason: &'static str },
}

impl Error {
    /// True for errors caused by addressing a node that does not exist.
    pub fn is_coordinate_error(&self) -> bool {
        return matches!(self, Error::NoSuchLevel { .. } | Error::NoSuchSibling { .. });
    }
}

/// Why a nested list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// The top level holds more than one value.
    #[error("more than one root")]
    MultipleRoots,

    /// A list appears with no value before it to own it.
    #[error("list of children has no parent value before it")]
    DanglingList,

    /// Two lists follow each other, so the second has no owner.
    #[error("two consecutive lists of children")]
    ConsecutiveLists,

    /// A value is followed by a list with nothing in it.
    #[error("empty list of children")]
    EmptyList,
}

impl From<MalformedReason> for Error {
    fn from(reason: MalformedReason) -> Self {
        return Error::MalformedEncoding(reason);
    }
}
