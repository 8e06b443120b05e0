use ordered_tree::Key;
use quickcheck::{Arbitrary, Gen};

#[path = "../common/mod.rs"]
mod common;
mod tree;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the key into the data structure
    Insert(Key),
    /// Delete the key from the data structure
    Delete(Key),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let key = Key::from(i8::arbitrary(g));
        if bool::arbitrary(g) {
            Op::Insert(key)
        } else {
            Op::Delete(key)
        }
    }
}
