use crate::cursors::Predicated;
use crate::predicate::{Not, Predicate};
use crate::sequence::Sequence;
use crate::slice::Slice;

/// Sequence combinator that yields leading elements while a predicate holds
///
/// Stops for good at the first element that fails; that element is consumed
/// from the source but not yielded.
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        TakeWhile { source, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = Predicated<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        Predicated::new(self.source.cursor(), self.predicate.clone())
    }
}

/// The first `count` elements, or all of them if there are fewer
pub fn take<S: Sequence>(source: S, count: usize) -> Slice<S> {
    Slice::contiguous(source, 0, Some(count))
}

/// Leading elements for which `predicate` holds
pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    TakeWhile::new(source, predicate)
}

/// Leading elements up to, not including, the first one matching `predicate`
pub fn take_until<S, P>(source: S, predicate: P) -> TakeWhile<S, Not<P>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    TakeWhile::new(source, Not::new(predicate))
}

/// Extension trait to add .take(), .take_while() and .take_until() methods
pub trait TakeExt: Sequence + Sized {
    fn take(self, count: usize) -> Slice<Self> {
        take(self, count)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhile::new(self, predicate)
    }

    fn take_until<P>(self, predicate: P) -> TakeWhile<Self, Not<P>>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhile::new(self, Not::new(predicate))
    }
}

impl<S> TakeExt for S where S: Sequence {}
