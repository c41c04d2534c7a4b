use crate::cursors::Filtered;
use crate::predicate::{Not, Predicate};
use crate::sequence::Sequence;

/// Sequence combinator that keeps only the elements satisfying a predicate
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Filter { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = Filtered<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        Filtered::new(self.source.cursor(), self.predicate.clone())
    }
}

/// Elements for which `predicate` holds, in source order
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    Filter::new(source, predicate)
}

/// Elements for which `predicate` does not hold, in source order
pub fn reject<S, P>(source: S, predicate: P) -> Filter<S, Not<P>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    Filter::new(source, Not::new(predicate))
}

/// Split a sequence into its matching and non-matching elements
///
/// Both halves are independent lazy views over the same source; each one
/// traverses the source separately when iterated.
pub fn partition<S, P>(source: S, predicate: P) -> (Filter<S, P>, Filter<S, Not<P>>)
where
    S: Sequence + Clone,
    P: Fn(&S::Item) -> bool + Clone,
{
    (
        Filter::new(source.clone(), predicate.clone()),
        Filter::new(source, Not::new(predicate)),
    )
}

/// Extension trait to add .filter(), .reject() and .partition() methods
pub trait FilterExt: Sequence + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    fn reject<P>(self, predicate: P) -> Filter<Self, Not<P>>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, Not::new(predicate))
    }

    fn partition<P>(self, predicate: P) -> (Filter<Self, P>, Filter<Self, Not<P>>)
    where
        Self: Clone,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        partition(self, predicate)
    }
}

impl<S> FilterExt for S where S: Sequence {}
