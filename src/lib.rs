//! Itree - an indexable tree.
//!
//! Every node is addressed directly by a [`Coordinate`]: its depth ("level")
//! and its rank among all nodes of that depth ("sibling index"). Nodes are
//! stored row by row, one row per level, with each row sorted so that the
//! children of one parent sit next to each other. Looking up a node is two
//! vector indexings; no parent or child pointers are walked.
//!
//! # Quick Start
//!
//! ```
//! use itree::Coordinate;
//! use itree::TreeMatrix;
//!
//! let mut tree = TreeMatrix::with_root("dog");
//! let cat = tree.append_child("cat", Coordinate::ROOT).unwrap();
//! tree.append_child("mouse", Coordinate::ROOT).unwrap();
//! tree.append_child("kitten", cat).unwrap();
//!
//! assert_eq!(*tree.data((1, 0)).unwrap(), "cat");
//! assert_eq!(tree.height(), 3);
//!
//! let names: Vec<_> = tree.iter().map(|node| *node.data()).collect();
//! assert_eq!(names, ["dog", "cat", "mouse", "kitten"]);
//! ```
//!
//! Coordinates are ephemeral: inserting or removing a node can shift the
//! ranks of later nodes on the same level.

pub mod coordinate;
pub mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod matrix;
pub mod nested;
pub mod node;
pub mod row;
pub mod view;

pub use coordinate::Coordinate;
pub use error::Error;
pub use error::MalformedReason;
pub use error::Result;
pub use matrix::TreeMatrix;
pub use nested::NestedList;
pub use node::ChildRange;
pub use node::Node;
pub use row::Row;
pub use view::NodeRef;
pub use view::Nodes;
