//! The tree matrix: one row per level, routing every structural operation.
//!
//! # Layout
//!
//! ```text
//! level 0:  root
//! level 1:  A         D
//! level 2:  B    C    E
//! ```
//!
//! Here `A` records children `0..=1` at level 2, `D` records `2..=2`, and
//! `E` records parent `1` at level 1. Appending a child to `A` inserts it at
//! rank 2 of level 2, pushes `E` to rank 3, and moves `D`'s range to `3..=3`.

use std::fmt;
use std::slice;

use crate::coordinate::Coordinate;
use crate::error::Error;
use crate::error::Result;
use crate::node::Node;
use crate::row::Row;
use crate::view::Iter;
use crate::view::NodeRef;
use crate::view::Nodes;

/// An indexable tree stored as rows of same-depth nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeMatrix<T> {
    rows: Vec<Row<T>>,
}

impl<T> Default for TreeMatrix<T> {
    fn default() -> Self {
        TreeMatrix::new()
    }
}

impl<T> TreeMatrix<T> {
    /// An empty tree, with no root and height 0.
    pub fn new() -> TreeMatrix<T> {
        return TreeMatrix { rows: Vec::new() };
    }

    pub fn with_root(data: T) -> TreeMatrix<T> {
        let mut tree = TreeMatrix::new();
        tree.set_root(data);
        return tree;
    }

    /// Number of levels. A root-only tree has height 1.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Same as [`height`](Self::height).
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        return self.rows.iter().map(Row::len).sum();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    pub fn row(&self, level: usize) -> Result<&Row<T>> {
        return self.rows.get(level).ok_or(Error::NoSuchLevel {
            level,
            height: self.rows.len(),
        });
    }

    pub(crate) fn row_at(&self, level: usize) -> &Row<T> {
        &self.rows[level]
    }

    /// Look up a node, failing if either half of the coordinate is out of
    /// range. Every public accessor goes through here.
    pub fn get_node(&self, at: impl Into<Coordinate>) -> Result<&Node<T>> {
        let at = at.into();
        return self.row(at.level)?.node(at.sibling);
    }

    pub(crate) fn get_node_mut(&mut self, at: impl Into<Coordinate>) -> Result<&mut Node<T>> {
        let at = at.into();
        let height = self.rows.len();
        let row = self
            .rows
            .get_mut(at.level)
            .ok_or(Error::NoSuchLevel { level: at.level, height })?;
        let len = row.len();
        return row.get_mut(at.sibling).ok_or(Error::NoSuchSibling { at, len });
    }

    pub fn data(&self, at: impl Into<Coordinate>) -> Result<&T> {
        return self.get_node(at).map(Node::data);
    }

    /// Payload access for writing. The tree's shape cannot be changed
    /// through this.
    pub fn data_mut(&mut self, at: impl Into<Coordinate>) -> Result<&mut T> {
        return self.get_node_mut(at).map(Node::data_mut);
    }

    /// A view of the node at `at`.
    pub fn get(&self, at: impl Into<Coordinate>) -> Result<NodeRef<'_, T>> {
        let at = at.into();
        self.get_node(at)?;
        return Ok(NodeRef::new(self, at));
    }

    pub fn root(&self) -> Result<NodeRef<'_, T>> {
        self.get(Coordinate::ROOT)
    }

    /// Views of the children of the node at `at`, in sibling order.
    pub fn children(&self, at: impl Into<Coordinate>) -> Result<Nodes<'_, T>> {
        return Ok(self.get(at)?.children());
    }

    /// Every node, level by level, left to right.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Set the root's payload, creating the root if the tree is empty.
    ///
    /// Returns the payload it replaced, if there was a root.
    pub fn set_root(&mut self, data: T) -> Option<T> {
        if let Some(root) = self.rows.first_mut().and_then(|row| row.get_mut(0)) {
            return Some(root.replace_data(data));
        }
        debug_assert!(self.rows.is_empty());
        self.rows.push(Row::root(data));
        log::debug!("created root");
        return None;
    }

    /// Append `data` as the last child of the node at `parent`, returning the
    /// coordinate of the new node.
    ///
    /// The new node goes one level below its parent, so a new level can only
    /// ever appear directly under the deepest one.
    pub fn append_child(&mut self, data: T, parent: impl Into<Coordinate>) -> Result<Coordinate> {
        let parent = parent.into();
        // Checked up front so a failed append never opens a level.
        self.get_node(parent)?;

        let level = parent.level + 1;
        if level == self.rows.len() {
            log::debug!("opening level {level}");
            self.rows.push(Row::new(level));
        }

        let (above, rest) = self.rows.split_at_mut(level);
        let (Some(parent_row), [row, below @ ..]) = (above.last_mut(), rest) else {
            unreachable!("levels {} and {level} exist", parent.level);
        };
        let sibling = row.append_child(data, parent.sibling, parent_row)?;
        if let Some(below) = below.first_mut() {
            below.parents_inserted(sibling);
        }

        let at = Coordinate::new(level, sibling);
        log::trace!("appended {at} under {parent}");
        return Ok(at);
    }

    /// Remove the leaf at `at` and return its payload.
    ///
    /// Later nodes in the same row move down one rank. If the row empties it
    /// is dropped, reducing the height by one.
    pub fn remove_node(&mut self, at: impl Into<Coordinate>) -> Result<T> {
        let at = at.into();
        let node = self.get_node(at)?;
        if !node.is_leaf() {
            return Err(Error::HasChildren { at, children: node.child_count() });
        }

        if let Some(parent) = node.parent() {
            self.rows[at.level - 1].remove_child(parent, at.sibling)?;
        }

        let removed = self.rows[at.level].remove(at.sibling);
        if let Some(below) = self.rows.get_mut(at.level + 1) {
            below.parents_removed(at.sibling);
        }
        log::trace!("removed {at}");

        if self.rows[at.level].is_empty() {
            debug_assert_eq!(at.level + 1, self.rows.len());
            self.rows.truncate(at.level);
            log::debug!("dropped empty level {}", at.level);
        }
        return Ok(removed.into_data());
    }

    /// Check every structural invariant, reporting the first that fails.
    ///
    /// Public operations keep these by construction; this exists for tests
    /// and fuzzing.
    pub fn validate(&self) -> Result<()> {
        for (level, row) in self.rows.iter().enumerate() {
            let corrupted = |sibling, reason| Error::Corrupted {
                at: Coordinate::new(level, sibling),
                reason,
            };

            if row.level() != level {
                return Err(corrupted(0, "row level does not match its position"));
            }
            if row.is_empty() {
                return Err(corrupted(0, "empty row"));
            }
            if level == 0 && row.len() != 1 {
                return Err(corrupted(1, "more than one root"));
            }

            let above = level.checked_sub(1).map(|l| &self.rows[l]);
            let below = self.rows.get(level + 1);
            let mut previous = None;
            let mut child_total = 0;

            for (sibling, node) in row.iter().enumerate() {
                let parent = node.parent();
                if parent < previous {
                    return Err(corrupted(sibling, "row not sorted by parent"));
                }
                previous = parent;

                match (above, parent) {
                    (None, None) => {}
                    (Some(above), Some(p)) => match above.get(p) {
                        Some(owner) if owner.child_range().is_some_and(|r| r.contains(sibling)) => {}
                        Some(_) => return Err(corrupted(sibling, "parent does not record this child")),
                        None => return Err(corrupted(sibling, "parent out of range")),
                    },
                    (None, Some(_)) => return Err(corrupted(sibling, "root has a parent")),
                    (Some(_), None) => return Err(corrupted(sibling, "missing parent")),
                }

                let Some(range) = node.child_range() else {
                    continue;
                };
                let Some(below) = below else {
                    return Err(corrupted(sibling, "children recorded on the deepest level"));
                };
                if range.last >= below.len() {
                    return Err(corrupted(sibling, "child range out of bounds"));
                }
                if range.indices().any(|c| below[c].parent() != Some(sibling)) {
                    return Err(corrupted(sibling, "child range covers another parent's child"));
                }
                child_total += range.len();
            }

            if let Some(below) = below {
                if child_total != below.len() {
                    return Err(corrupted(0, "child ranges do not cover the level below"));
                }
            }
        }
        return Ok(());
    }
}

impl<'a, T> IntoIterator for &'a TreeMatrix<T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per level, payloads separated by commas.
impl<T: fmt::Display> fmt::Display for TreeMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, row) in self.rows.iter().enumerate() {
            if level > 0 {
                writeln!(f)?;
            }
            for (sibling, node) in row.iter().enumerate() {
                if sibling > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", node.data())?;
            }
        }
        Ok(())
    }
}
