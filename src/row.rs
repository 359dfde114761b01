//! Level rows.
//!
//! A row holds every node of one depth. Nodes are kept sorted by the sibling
//! index of their parent, so the children of any one parent sit next to each
//! other and their span can be recorded as a single range on the parent.

use std::ops::Index;
use std::slice;

use crate::coordinate::Coordinate;
use crate::error::Error;
use crate::error::Result;
use crate::node::Node;

/// One level of a tree. Rows are read-only outside the matrix that owns
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row<T> {
    level: usize,
    nodes: Vec<Node<T>>,
}

impl<T> Row<T> {
    pub(crate) fn new(level: usize) -> Row<T> {
        return Row { level, nodes: Vec::new() };
    }

    /// Level 0 holding only `data`, as the root.
    pub(crate) fn root(data: T) -> Row<T> {
        return Row { level: 0, nodes: vec![Node::new(data, None)] };
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, sibling: usize) -> Option<&Node<T>> {
        self.nodes.get(sibling)
    }

    /// The node at `sibling`, or `Error::NoSuchSibling` past the end of the
    /// row. For a view of the node, go through
    /// [`TreeMatrix::get`](crate::TreeMatrix::get).
    pub fn node(&self, sibling: usize) -> Result<&Node<T>> {
        return self.nodes.get(sibling).ok_or(Error::NoSuchSibling {
            at: Coordinate::new(self.level, sibling),
            len: self.nodes.len(),
        });
    }

    pub(crate) fn get_mut(&mut self, sibling: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(sibling)
    }

    pub fn iter(&self) -> slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    /// Rank a new node with parent `parent` would take in this row: directly
    /// after the last node whose parent is not greater.
    fn rank_for(&self, parent: Option<usize>) -> usize {
        return self.nodes.partition_point(|node| node.parent() <= parent);
    }

    /// Insert `data` as the last child of the node at `parent` in
    /// `parent_row`, returning its sibling index.
    ///
    /// Nodes in `parent_row` after the parent have their child ranges moved
    /// right to make room, and the parent records the new child. The caller
    /// fixes up the row below, whose parent indices point into this row.
    /// Fails without touching either row if `parent_row` has no such node.
    pub(crate) fn append_child(
        &mut self,
        data: T,
        parent: usize,
        parent_row: &mut Row<T>,
    ) -> Result<usize> {
        debug_assert_eq!(parent_row.level + 1, self.level);
        let len = parent_row.nodes.len();
        if parent >= len {
            return Err(Error::NoSuchSibling {
                at: Coordinate::new(parent_row.level, parent),
                len,
            });
        }

        let sibling = self.rank_for(Some(parent));
        for later in &mut parent_row.nodes[parent + 1..] {
            later.shift_right();
        }
        parent_row.nodes[parent].append_child(sibling);
        self.nodes.insert(sibling, Node::new(data, Some(parent)));
        return Ok(sibling);
    }

    /// Forget that the node at `parent` in this row owns `child` in the row
    /// below, then move the child ranges of every later node one slot left
    /// since the row below is about to close the gap.
    pub(crate) fn remove_child(&mut self, parent: usize, child: usize) -> Result<()> {
        let len = self.nodes.len();
        let node = self.nodes.get_mut(parent).ok_or(Error::NoSuchSibling {
            at: Coordinate::new(self.level, parent),
            len,
        })?;
        node.remove_child(child)?;

        for later in &mut self.nodes[parent + 1..] {
            later.shift_left();
        }
        return Ok(());
    }

    /// The row above gained a node at `at`; parent indices from there on
    /// move up by one.
    pub(crate) fn parents_inserted(&mut self, at: usize) {
        let start = self.rank_for(at.checked_sub(1));
        for node in &mut self.nodes[start..] {
            node.set_parent(node.parent().map(|p| p + 1));
        }
    }

    /// The row above lost its node at `at`; parent indices past it move down
    /// by one. Nobody may still point at `at` itself.
    pub(crate) fn parents_removed(&mut self, at: usize) {
        let start = self.rank_for(Some(at));
        debug_assert!(self.nodes[..start].iter().all(|node| node.parent() != Some(at)));
        for node in &mut self.nodes[start..] {
            node.set_parent(node.parent().map(|p| p - 1));
        }
    }

    pub(crate) fn remove(&mut self, sibling: usize) -> Node<T> {
        self.nodes.remove(sibling)
    }
}

/// Panics when `sibling` is past the end of the row, like slice indexing.
impl<T> Index<usize> for Row<T> {
    type Output = Node<T>;

    fn index(&self, sibling: usize) -> &Node<T> {
        &self.nodes[sibling]
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a Node<T>;
    type IntoIter = slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
