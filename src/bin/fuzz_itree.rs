//! AFL fuzz harness for the tree matrix
//!
//! This harness checks the structural properties after every operation:
//! 1. Consistency: `validate()` finds no broken parent, range or ordering
//! 2. Size: node count equals appends minus successful removals
//! 3. Leaf-only removal: removing an internal node fails and changes nothing
//!
//! Targets are picked as fractions of the current level and row sizes, so
//! most inputs address live nodes and some address missing ones.

use afl::fuzz;
use itree::Coordinate;
use itree::Error;
use itree::TreeMatrix;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Append a child under the addressed node
    Append { level: u8, sibling: u8 },
    /// Remove the addressed node
    Remove { level: u8, sibling: u8 },
    /// Replace or recreate the root
    SetRoot,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 3;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => {
                let op = FuzzOp::Append { level: rest[0], sibling: rest[1] };
                Some((op, &rest[2..]))
            }
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Remove { level: rest[0], sibling: rest[1] };
                Some((op, &rest[2..]))
            }
            2 => Some((FuzzOp::SetRoot, rest)),
            _ => None,
        }
    }
}

/// Scale a byte onto `0..=len`, so the top value lands one past the end.
fn scaled(frac: u8, len: usize) -> usize {
    return (frac as usize) * (len + 1) / 256;
}

fn target(tree: &TreeMatrix<u32>, level: u8, sibling: u8) -> Coordinate {
    let level = scaled(level, tree.height());
    let width = tree.row(level).map_or(0, |row| row.len());
    return Coordinate::new(level, scaled(sibling, width));
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut tree = TreeMatrix::new();
        let mut expected_len = 0usize;
        let mut next = 0u32;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            next += 1;

            match op {
                FuzzOp::Append { level, sibling } => {
                    let parent = target(&tree, level, sibling);
                    let exists = tree.get_node(parent).is_ok();
                    match tree.append_child(next, parent) {
                        Ok(at) => {
                            assert!(exists, "append under missing {parent} succeeded");
                            assert_eq!(at.level, parent.level + 1);
                            assert_eq!(*tree.data(at).unwrap(), next);
                            expected_len += 1;
                        }
                        Err(err) => {
                            assert!(!exists, "append under {parent} failed: {err}");
                            assert!(err.is_coordinate_error());
                        }
                    }
                }

                FuzzOp::Remove { level, sibling } => {
                    let at = target(&tree, level, sibling);
                    let before = tree.clone();
                    match tree.remove_node(at) {
                        Ok(_) => expected_len -= 1,
                        Err(Error::HasChildren { .. }) => {
                            // CRITICAL INVARIANT: failed removal is a no-op!
                            assert_eq!(tree, before, "failed removal of {at} changed the tree");
                        }
                        Err(err) => {
                            assert!(err.is_coordinate_error(), "unexpected error {err}");
                            assert_eq!(tree, before);
                        }
                    }
                }

                FuzzOp::SetRoot => {
                    if tree.set_root(next).is_none() {
                        expected_len += 1;
                    }
                }
            }

            if let Err(err) = tree.validate() {
                panic!("invariant broken after {op:?}: {err}\n{tree:?}");
            }
            assert_eq!(tree.len(), expected_len, "Length mismatch after {op:?}");
        }

        // Round trip through the nested-list encoding
        let decoded = TreeMatrix::from_nested_list(tree.to_nested_list()).unwrap();
        assert_eq!(decoded, tree, "Round trip changed the tree");
    });
}
