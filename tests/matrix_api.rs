//! Scenario tests for the public tree API.

use itree::Coordinate;
use itree::Error;
use itree::NodeRef;
use itree::TreeMatrix;

// =============================================================================
// Helpers
// =============================================================================

fn dog_cat_mouse() -> TreeMatrix<&'static str> {
    let mut tree = TreeMatrix::new();
    tree.set_root("dog");
    tree.append_child("cat", Coordinate::ROOT).unwrap();
    tree.append_child("mouse", Coordinate::ROOT).unwrap();
    return tree;
}

fn names(tree: &TreeMatrix<&'static str>) -> Vec<&'static str> {
    return tree.iter().map(|node| *node.data()).collect();
}

// =============================================================================
// Building
// =============================================================================

#[test]
fn len_counts_every_node() {
    let tree = dog_cat_mouse();
    assert_eq!(tree.len(), 3);
}

#[test]
fn first_set_root_creates_root() {
    let mut tree = TreeMatrix::new();
    assert_eq!(tree.set_root("dog"), None);
    assert_eq!(*tree.root().unwrap().data(), "dog");
    assert_eq!(tree.height(), 1);
}

#[test]
fn append_returns_coordinates() {
    let mut tree = TreeMatrix::with_root("dog");
    let cat = tree.append_child("cat", Coordinate::ROOT).unwrap();
    let mouse = tree.append_child("mouse", Coordinate::ROOT).unwrap();
    tree.append_child("kitten", cat).unwrap();
    tree.append_child("mouseling", mouse).unwrap();
    let kitten2 = tree.append_child("kitten2", cat).unwrap();
    assert_eq!(kitten2, Coordinate::new(2, 1));
}

#[test]
fn indexing_children() {
    let mut tree = dog_cat_mouse();
    assert_eq!(*tree.data((1, 0)).unwrap(), "cat");
    tree.append_child("kitten", (1, 0)).unwrap();
    assert_eq!(*tree.data((2, 0)).unwrap(), "kitten");
}

#[test]
fn breadth_first_after_interleaved_appends() {
    let mut tree = TreeMatrix::with_root("root");
    let a = tree.append_child("A", Coordinate::ROOT).unwrap();
    tree.append_child("B", a).unwrap();
    tree.append_child("C", a).unwrap();
    tree.append_child("D", Coordinate::ROOT).unwrap();
    assert_eq!(names(&tree), vec!["root", "A", "D", "B", "C"]);
}

#[test]
fn append_below_missing_level_is_rejected() {
    let mut tree = dog_cat_mouse();
    let err = tree.append_child("ghost", (2, 0)).unwrap_err();
    assert!(err.is_coordinate_error());
    assert_eq!(tree.height(), 2);
}

// =============================================================================
// Addressing
// =============================================================================

#[test]
fn imaginary_coordinates_fail() {
    let tree = dog_cat_mouse();
    assert_eq!(
        tree.get((66, 0)).unwrap_err(),
        Error::NoSuchLevel { level: 66, height: 2 }
    );
    assert_eq!(
        tree.get((1, 2)).unwrap_err(),
        Error::NoSuchSibling { at: Coordinate::new(1, 2), len: 2 }
    );
    assert!(tree.data((0, 3)).unwrap_err().is_coordinate_error());
}

#[test]
fn root_of_empty_tree_fails() {
    let tree: TreeMatrix<()> = TreeMatrix::new();
    assert!(tree.root().unwrap_err().is_coordinate_error());
}

#[test]
fn children_helper_matches_view() {
    let tree = dog_cat_mouse();
    let from_tree: Vec<_> = tree.children(Coordinate::ROOT).unwrap().map(|c| c.coordinate()).collect();
    assert_eq!(from_tree, vec![Coordinate::new(1, 0), Coordinate::new(1, 1)]);
    assert!(tree.children((5, 5)).is_err());
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn deleting_non_leaf_fails() {
    let mut tree = TreeMatrix::with_root("dog");
    tree.append_child("cat", Coordinate::ROOT).unwrap();
    let before = tree.clone();

    let err = tree.remove_node(Coordinate::ROOT).unwrap_err();
    assert_eq!(err, Error::HasChildren { at: Coordinate::ROOT, children: 1 });
    assert_eq!(tree, before);
}

#[test]
fn deleting_leaf() {
    let mut tree = TreeMatrix::with_root("dog");
    tree.append_child("cat", Coordinate::ROOT).unwrap();

    assert_eq!(tree.remove_node((1, 0)), Ok("cat"));
    assert_eq!(tree.len(), 1);
    assert!(tree.get((1, 0)).is_err());
    assert!(tree.root().unwrap().is_leaf());
}

#[test]
fn deleting_root() {
    let mut tree = TreeMatrix::with_root("dog");
    tree.remove_node((0, 0)).unwrap();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);

    tree.set_root("b");
    assert_eq!(tree.len(), 1);
}

#[test]
fn removing_shifts_later_siblings_only() {
    let mut tree = TreeMatrix::with_root(0);
    for i in 1..=4 {
        tree.append_child(i, Coordinate::ROOT).unwrap();
    }
    tree.append_child(10, (1, 3)).unwrap();

    tree.remove_node((1, 1)).unwrap();

    let level: Vec<_> = tree.row(1).unwrap().iter().map(|n| *n.data()).collect();
    assert_eq!(level, vec![1, 3, 4]);
    assert_eq!(tree.root().unwrap().node().children_indices(), 0..3);
    assert_eq!(*tree.get((2, 0)).unwrap().parent().unwrap().data(), 4);
    tree.validate().unwrap();
}

#[test]
fn tearing_down_leaf_by_leaf() {
    let mut tree = TreeMatrix::with_root(0);
    let a = tree.append_child(1, Coordinate::ROOT).unwrap();
    let b = tree.append_child(2, a).unwrap();
    tree.append_child(3, b).unwrap();
    tree.append_child(4, Coordinate::ROOT).unwrap();

    let mut removed = Vec::new();
    while !tree.is_empty() {
        let leaf = tree.iter().filter(|n| n.is_leaf()).last().unwrap().coordinate();
        removed.push(tree.remove_node(leaf).unwrap());
        tree.validate().unwrap();
    }
    assert_eq!(removed, vec![3, 2, 4, 1, 0]);
    assert_eq!(tree.height(), 0);
}

// =============================================================================
// Extension by composition
// =============================================================================

/// Node behaviour layered on a view rather than built into it.
struct Greeter<'a>(NodeRef<'a, i32>);

impl Greeter<'_> {
    fn greeting(&self) -> String {
        format!("Hi, I'm node: {}", self.0)
    }

    fn say_hi(&self, out: &mut Vec<String>) {
        out.push(self.greeting());
        for child in self.0.children() {
            Greeter(child).say_hi(out);
        }
    }

    fn sum(&self) -> i32 {
        return self.0.children().map(|c| Greeter(c).sum()).sum::<i32>() + self.0.data();
    }
}

fn chain() -> (TreeMatrix<i32>, Coordinate) {
    let mut tree = TreeMatrix::with_root(0);
    let child = tree.append_child(1, Coordinate::ROOT).unwrap();
    tree.append_child(2, child).unwrap();
    let three = tree.append_child(3, child).unwrap();
    let four = tree.append_child(4, three).unwrap();
    let five = tree.append_child(5, four).unwrap();
    return (tree, five);
}

#[test]
fn extension_visits_every_node() {
    let (tree, last) = chain();
    let mut lines = Vec::new();
    Greeter(tree.root().unwrap()).say_hi(&mut lines);

    assert_eq!(lines.len(), 6);
    assert_eq!(lines.last().unwrap(), &Greeter(tree.get(last).unwrap()).greeting());
    assert_eq!(lines[0], "Hi, I'm node: 0 : (0, 0)");
}

#[test]
fn extension_reads_payloads() {
    let (tree, _) = chain();
    assert_eq!(Greeter(tree.root().unwrap()).sum(), (0..6).sum::<i32>());
}
