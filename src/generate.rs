//! Random nested lists, for large round-trip tests and benchmarks.

use rand::Rng;

use crate::nested::NestedList;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Value,
    Open,
    Close,
}

/// A random list of children holding the values `0..num_elem` in order, with
/// `num_sublists` bracket pairs dropped in at random.
///
/// No two brackets are ever adjacent, so every sublist is non-empty and is
/// preceded by a value to own it. Prefix a root to get a whole tree:
/// `[NestedList::Value(root), NestedList::List(children)]`.
///
/// # Panics
///
/// Panics if `num_elem < 2` or if there are too few values to keep every
/// bracket apart (`num_elem < 4 * num_sublists`).
pub fn nested_list<R: Rng + ?Sized>(
    rng: &mut R,
    num_elem: usize,
    num_sublists: usize,
) -> Vec<NestedList<u64>> {
    assert!(num_elem > 1, "need at least two values, got {num_elem}");
    assert!(
        num_elem >= 4 * num_sublists,
        "{num_elem} values cannot separate {num_sublists} sublists"
    );

    // Brackets stay at least this many slots from each other and the ends.
    const GAP: usize = 1;

    let mut slots = vec![Slot::Value; num_elem + 2 * num_sublists];
    let len = slots.len();
    let is_clear = |slots: &[Slot], at: usize| {
        return slots[at - GAP..=at + GAP].iter().all(|s| *s == Slot::Value);
    };

    for _ in 0..num_sublists {
        loop {
            let a = rng.gen_range(GAP..len - GAP);
            let b = rng.gen_range(GAP..len - GAP);
            let (open, close) = (a.min(b), a.max(b));
            if close - open <= GAP {
                continue;
            }
            if is_clear(&slots, open) && is_clear(&slots, close) {
                slots[open] = Slot::Open;
                slots[close] = Slot::Close;
                break;
            }
        }
    }

    let mut stack: Vec<Vec<NestedList<u64>>> = vec![Vec::new()];
    let mut next = 0u64;
    for slot in slots {
        match slot {
            Slot::Value => {
                if let Some(top) = stack.last_mut() {
                    top.push(NestedList::Value(next));
                }
                next += 1;
            }
            Slot::Open => stack.push(Vec::new()),
            Slot::Close => {
                // Every close has its open earlier, so the top is never the
                // outermost list here.
                if let Some(list) = stack.pop() {
                    if let Some(top) = stack.last_mut() {
                        top.push(NestedList::List(list));
                    }
                }
            }
        }
    }
    return stack.pop().unwrap_or_default();
}
