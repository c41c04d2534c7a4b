use crate::map::{Map, map};
use crate::sequence::Sequence;
use crate::source::{Integers, integers};
use crate::zip::{Zip, zip};

/// Pair every element with its zero-based position
pub fn enumerate<S: Sequence>(source: S) -> Zip<(Integers, S)> {
    zip(integers(0), source)
}

/// Pair every element with a key computed from it
///
/// The source is traversed twice in lockstep, once for the keys and once for
/// the elements, so it must be `Clone` and restartable.
pub fn index<S, F, K>(source: S, key: F) -> Zip<(Map<S, F>, S)>
where
    S: Sequence + Clone,
    F: Fn(S::Item) -> K + Clone,
{
    zip(map(source.clone(), key), source)
}

/// Extension trait to add .enumerate() and .index() methods
pub trait EnumerateExt: Sequence + Sized {
    fn enumerate(self) -> Zip<(Integers, Self)> {
        enumerate(self)
    }

    fn index<F, K>(self, key: F) -> Zip<(Map<Self, F>, Self)>
    where
        Self: Clone,
        F: Fn(Self::Item) -> K + Clone,
    {
        index(self, key)
    }
}

impl<S> EnumerateExt for S where S: Sequence {}
