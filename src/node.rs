//! Node records.
//!
//! A node does not point at its parent or children directly. It remembers the
//! sibling index of its parent in the row above, and the contiguous span of
//! sibling indices its children occupy in the row below. The level is implied
//! by the row the node lives in.

use std::ops::Range;

use crate::error::Error;
use crate::error::Result;

/// An inclusive span of sibling indices in the row below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildRange {
    pub first: usize,
    pub last: usize,
}

impl ChildRange {
    pub fn len(&self) -> usize {
        return self.last - self.first + 1;
    }

    pub fn contains(&self, sibling: usize) -> bool {
        return self.first <= sibling && sibling <= self.last;
    }

    pub fn indices(&self) -> Range<usize> {
        return self.first..self.last + 1;
    }
}

/// A payload plus the bookkeeping that places it in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    data: T,
    parent: Option<usize>,
    children: Option<ChildRange>,
}

impl<T> Node<T> {
    /// A leaf whose parent sits at `parent` in the row above.
    /// `None` marks the root.
    pub fn new(data: T, parent: Option<usize>) -> Node<T> {
        return Node { data, parent, children: None };
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Replace the payload, returning the previous one.
    pub fn replace_data(&mut self, data: T) -> T {
        return std::mem::replace(&mut self.data, data);
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn child_range(&self) -> Option<ChildRange> {
        self.children
    }

    pub fn child_count(&self) -> usize {
        return self.children.map_or(0, |range| range.len());
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Sibling indices of the children in the row below. Empty for a leaf.
    pub fn children_indices(&self) -> Range<usize> {
        return match self.children {
            Some(range) => range.indices(),
            None => 0..0,
        };
    }

    /// Record a new child at `sibling` in the row below.
    ///
    /// Children always arrive directly after the last recorded one.
    ///
    /// # Panics
    ///
    /// Panics if `sibling` would leave a gap in the range, which means the
    /// row bookkeeping is broken.
    pub fn append_child(&mut self, sibling: usize) {
        match self.children {
            None => {
                self.children = Some(ChildRange { first: sibling, last: sibling });
            }
            Some(ref mut range) => {
                assert_eq!(
                    sibling,
                    range.last + 1,
                    "child appended out of order: range is {}..={}",
                    range.first,
                    range.last,
                );
                range.last += 1;
            }
        }
    }

    /// Forget the child at `sibling`.
    ///
    /// The row below closes the gap by shifting later nodes down, so every
    /// surviving child ends up one index lower than before except those in
    /// front of the removed one. Either way the range loses its last slot.
    pub fn remove_child(&mut self, sibling: usize) -> Result<()> {
        let range = match self.children {
            Some(range) if range.contains(sibling) => range,
            _ => {
                return Err(Error::ChildNotFound {
                    child: sibling,
                    range: self.children_indices(),
                });
            }
        };

        if range.first == range.last {
            self.children = None;
        } else {
            self.children = Some(ChildRange { first: range.first, last: range.last - 1 });
        }
        return Ok(());
    }

    /// A child of an earlier node in this row was removed.
    pub fn shift_left(&mut self) {
        if let Some(range) = &mut self.children {
            range.first -= 1;
            range.last -= 1;
        }
    }

    /// A child of an earlier node in this row was inserted.
    pub fn shift_right(&mut self) {
        if let Some(range) = &mut self.children {
            range.first += 1;
            range.last += 1;
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }
}
