//! Nested-list encoding of whole trees.
//!
//! A list of children is a sequence of payloads, where any payload may be
//! followed by a list holding its own children:
//!
//! ```text
//! [1, [3, [20, [4, 10], 5, [2, [6]], 3, [3]]]]
//! ```
//!
//! Here `1` is the root, `3` its only child, and `20`, `5`, `3` the children
//! of `3`. A whole tree uses the same shape with exactly one payload at the
//! top: `[]` is the empty tree and `[root]` a tree of one node.
//!
//! With serde the encoding maps directly onto JSON arrays.

use std::vec;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;

use crate::coordinate::Coordinate;
use crate::error::MalformedReason;
use crate::error::Result;
use crate::matrix::TreeMatrix;
use crate::view::NodeRef;

/// One element of a nested list: a payload, or the children of the payload
/// before it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedList<T> {
    List(Vec<NestedList<T>>),
    Value(T),
}

impl<T> TreeMatrix<T> {
    /// Encode the tree, cloning every payload.
    ///
    /// The walk itself runs in constant stack space, but [`NestedList`] is a
    /// recursive type: dropping or serializing the result recurses once per
    /// level, so trees tens of thousands of levels deep can overflow the
    /// stack there. `serde_json` also refuses input nested more than 128
    /// arrays deep unless its recursion limit is disabled.
    pub fn to_nested_list(&self) -> Vec<NestedList<T>>
    where
        T: Clone,
    {
        return self.encode_with(&T::clone);
    }

    fn encode_with<'a, U>(&'a self, f: &impl Fn(&'a T) -> U) -> Vec<NestedList<U>> {
        let Ok(root) = self.root() else {
            return Vec::new();
        };
        let mut encoded = vec![NestedList::Value(f(root.data()))];
        if !root.is_leaf() {
            encoded.push(NestedList::List(encode_children(root, f)));
        }
        return encoded;
    }

    /// Build a tree from its nested-list encoding.
    ///
    /// Fails on input that does not describe exactly one tree: more than one
    /// top-level payload, a list with no payload before it, two lists in a
    /// row, or an empty list of children.
    ///
    /// Decoding does not recurse; the depth limits noted on
    /// [`to_nested_list`](TreeMatrix::to_nested_list) apply to building and
    /// dropping `list` itself.
    pub fn from_nested_list(list: Vec<NestedList<T>>) -> Result<TreeMatrix<T>> {
        let mut tree = TreeMatrix::new();
        decode_into(&mut tree, list)?;
        log::debug!("decoded {} nodes over {} levels", tree.len(), tree.height());
        return Ok(tree);
    }
}

fn encode_children<'a, T, U>(node: NodeRef<'a, T>, f: &impl Fn(&'a T) -> U) -> Vec<NestedList<U>> {
    // One open list per level on the way down, so depth costs heap, not stack.
    let mut stack = vec![(Vec::with_capacity(node.child_count()), node.children())];
    let mut encoded = Vec::new();
    while let Some((list, children)) = stack.last_mut() {
        if let Some(child) = children.next() {
            list.push(NestedList::Value(f(child.data())));
            if !child.is_leaf() {
                stack.push((Vec::with_capacity(child.child_count()), child.children()));
            }
            continue;
        }
        if let Some((done, _)) = stack.pop() {
            match stack.last_mut() {
                Some((outer, _)) => outer.push(NestedList::List(done)),
                None => encoded = done,
            }
        }
    }
    return encoded;
}

/// A list being decoded: whose children its values become, and what the
/// last value appended from it was.
struct Frame<T> {
    parent: Option<Coordinate>,
    items: vec::IntoIter<NestedList<T>>,
    owner: Option<Coordinate>,
    after_list: bool,
}

impl<T> Frame<T> {
    fn new(parent: Option<Coordinate>, items: Vec<NestedList<T>>) -> Frame<T> {
        return Frame { parent, items: items.into_iter(), owner: None, after_list: false };
    }
}

/// Append everything in `list` to `tree`, the first value as the root.
///
/// Nodes are appended in depth-first order, so every new node lands at the
/// end of its row and no coordinate held here ever shifts.
fn decode_into<T>(tree: &mut TreeMatrix<T>, list: Vec<NestedList<T>>) -> Result<()> {
    let mut stack = vec![Frame::new(None, list)];
    while let Some(frame) = stack.last_mut() {
        let Some(item) = frame.items.next() else {
            stack.pop();
            continue;
        };
        match item {
            NestedList::Value(data) => {
                frame.owner = Some(match frame.parent {
                    Some(parent) => tree.append_child(data, parent)?,
                    None if tree.is_empty() => {
                        tree.set_root(data);
                        Coordinate::ROOT
                    }
                    None => return Err(MalformedReason::MultipleRoots.into()),
                });
                frame.after_list = false;
            }
            NestedList::List(children) => {
                if frame.after_list {
                    return Err(MalformedReason::ConsecutiveLists.into());
                }
                let Some(owner) = frame.owner.take() else {
                    return Err(MalformedReason::DanglingList.into());
                };
                if children.is_empty() {
                    return Err(MalformedReason::EmptyList.into());
                }
                frame.after_list = true;
                stack.push(Frame::new(Some(owner), children));
            }
        }
    }
    return Ok(());
}

impl<T: Serialize> Serialize for TreeMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode_with(&|data| data).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for TreeMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let list = Vec::<NestedList<T>>::deserialize(deserializer)?;
        return TreeMatrix::from_nested_list(list).map_err(D::Error::custom);
    }
}
