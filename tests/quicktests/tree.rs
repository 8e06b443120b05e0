use ordered_tree::{Key, OrderedTree, TreeError};

use std::collections::BTreeSet;

use crate::common::keys_in_order;
use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both. Returns whether every
/// insert and delete reported the same outcome the set did.
fn do_ops(ops: &[Op], tree: &mut OrderedTree, set: &mut BTreeSet<Key>) -> bool {
    ops.iter().all(|op| match *op {
        Op::Insert(k) => {
            let expected = if set.insert(k) {
                Ok(())
            } else {
                Err(TreeError::Duplicate(k))
            };
            tree.insert(k) == expected
        }
        Op::Delete(k) => {
            let expected = if set.remove(&k) {
                Ok(())
            } else {
                Err(TreeError::NotFound(k))
            };
            tree.delete(k) == expected
        }
    })
}

fn strictly_increasing(keys: &[Key]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();

        let outcomes_match = do_ops(&ops, &mut tree, &mut set);
        let keys = keys_in_order(&tree);

        outcomes_match
            && tree.len() == set.len()
            && keys.len() == tree.len()
            && keys.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn insertions_stay_ordered(xs: Vec<i32>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            let _ = tree.insert(*x);
        }

        strictly_increasing(&keys_in_order(&tree))
    }
}

quickcheck::quickcheck! {
    fn second_insert_is_duplicate(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            let _ = tree.insert(Key::from(*x));
        }
        let len = tree.len();

        xs.iter().all(|x| tree.insert(Key::from(*x)) == Err(TreeError::Duplicate(Key::from(*x))))
            && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            let _ = tree.insert(Key::from(*x));
        }

        nots.iter()
            .filter(|x| !xs.contains(*x))
            .all(|x| tree.find(Key::from(*x)).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            let _ = tree.insert(Key::from(*x));
        }
        for delete in &deletes {
            let _ = tree.delete(Key::from(*delete));
        }

        let still_present: BTreeSet<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();

        deletes.iter().all(|x| tree.find(Key::from(*x)).is_none())
            && still_present.iter().all(|x| tree.contains(Key::from(**x)))
            && tree.len() == still_present.len()
            && strictly_increasing(&keys_in_order(&tree))
    }
}

quickcheck::quickcheck! {
    fn deleting_everything_empties(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            let _ = tree.insert(Key::from(*x));
        }
        for x in &xs {
            let _ = tree.delete(Key::from(*x));
        }

        tree.is_empty() && tree.height() == -1 && tree.min().is_none() && tree.max().is_none()
    }
}
