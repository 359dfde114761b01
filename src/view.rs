//! Borrowed views of nodes.
//!
//! A [`NodeRef`] pairs a matrix with a coordinate that was valid when the view
//! was made. Because the view borrows the matrix, no mutation can happen while
//! it is alive, so the coordinate stays valid for the view's whole life.
//!
//! Views carry no behaviour of their own beyond navigation. To add domain
//! methods, wrap a `NodeRef` in your own type:
//!
//! ```
//! use itree::NodeRef;
//! use itree::TreeMatrix;
//!
//! struct Summing<'a>(NodeRef<'a, i64>);
//!
//! impl Summing<'_> {
//!     fn sum(&self) -> i64 {
//!         let children: i64 = self.0.children().map(|c| Summing(c).sum()).sum();
//!         return children + self.0.data();
//!     }
//! }
//!
//! let mut tree = TreeMatrix::with_root(1);
//! let child = tree.append_child(2, (0, 0)).unwrap();
//! tree.append_child(3, child).unwrap();
//! assert_eq!(Summing(tree.root().unwrap()).sum(), 6);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use smallvec::SmallVec;

use crate::coordinate::Coordinate;
use crate::matrix::TreeMatrix;
use crate::node::Node;

/// Ancestor paths of up to this many levels stay on the stack.
const INLINE_PATH: usize = 8;

pub type Path = SmallVec<[Coordinate; INLINE_PATH]>;

/// A node of a [`TreeMatrix`], seen through its coordinate.
pub struct NodeRef<'a, T> {
    tree: &'a TreeMatrix<T>,
    at: Coordinate,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// `at` must name a live node of `tree`.
    pub(crate) fn new(tree: &'a TreeMatrix<T>, at: Coordinate) -> NodeRef<'a, T> {
        return NodeRef { tree, at };
    }

    pub fn tree(&self) -> &'a TreeMatrix<T> {
        self.tree
    }

    pub fn coordinate(&self) -> Coordinate {
        self.at
    }

    pub fn level(&self) -> usize {
        self.at.level
    }

    pub fn sibling_index(&self) -> usize {
        self.at.sibling
    }

    pub fn node(&self) -> &'a Node<T> {
        // Holding `&TreeMatrix` freezes the tree, so `at` is still live.
        return &self.tree.row_at(self.at.level)[self.at.sibling];
    }

    /// The payload. This is the only way to reach it from a view.
    pub fn data(&self) -> &'a T {
        self.node().data()
    }

    pub fn is_root(&self) -> bool {
        self.node().parent().is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        let parent = self.node().parent()?;
        return Some(NodeRef::new(self.tree, Coordinate::new(self.at.level - 1, parent)));
    }

    pub fn children(&self) -> Nodes<'a, T> {
        return Nodes::new(self.tree, self.at.level + 1, self.node().children_indices());
    }

    /// Every node on this node's level, this one included.
    pub fn siblings(&self) -> Nodes<'a, T> {
        let len = self.tree.row_at(self.at.level).len();
        return Nodes::new(self.tree, self.at.level, 0..len);
    }

    /// Coordinates from the root down to this node, inclusive.
    pub fn path(&self) -> Path {
        let mut path = Path::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            path.push(node.at);
            current = node.parent();
        }
        path.reverse();
        return path;
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("at", &self.at)
            .field("data", self.data())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.data(), self.at)
    }
}

/// Views of a run of consecutive nodes on one level.
pub struct Nodes<'a, T> {
    tree: &'a TreeMatrix<T>,
    level: usize,
    range: Range<usize>,
}

impl<'a, T> Nodes<'a, T> {
    fn new(tree: &'a TreeMatrix<T>, level: usize, range: Range<usize>) -> Nodes<'a, T> {
        return Nodes { tree, level, range };
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let sibling = self.range.next()?;
        return Some(NodeRef::new(self.tree, Coordinate::new(self.level, sibling)));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let sibling = self.range.next_back()?;
        return Some(NodeRef::new(self.tree, Coordinate::new(self.level, sibling)));
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}
impl<T> FusedIterator for Nodes<'_, T> {}

/// Breadth-first iteration over a whole tree.
pub struct Iter<'a, T> {
    tree: &'a TreeMatrix<T>,
    at: Coordinate,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a TreeMatrix<T>) -> Iter<'a, T> {
        return Iter { tree, at: Coordinate::ROOT, remaining: tree.len() };
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let row = self.tree.row(self.at.level).ok()?;
        let view = NodeRef::new(self.tree, self.at);
        self.remaining -= 1;
        self.at.sibling += 1;
        if self.at.sibling == row.len() {
            self.at = Coordinate::new(self.at.level + 1, 0);
        }
        return Some(view);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
