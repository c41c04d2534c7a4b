use crate::cursors::Dropping;
use crate::predicate::{Not, Predicate};
use crate::sequence::Sequence;
use crate::slice::Slice;

/// Sequence combinator that skips leading elements while a predicate holds
///
/// The first failing element and everything after it are yielded unchanged.
#[derive(Debug, Clone)]
pub struct DropWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> DropWhile<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        DropWhile { source, predicate }
    }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = Dropping<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        Dropping::new(self.source.cursor(), self.predicate.clone())
    }
}

/// Everything after the first `count` elements
pub fn drop<S: Sequence>(source: S, count: usize) -> Slice<S> {
    Slice::contiguous(source, count, None)
}

/// Everything from the first element for which `predicate` fails
pub fn drop_while<S, P>(source: S, predicate: P) -> DropWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    DropWhile::new(source, predicate)
}

/// Everything from the first element matching `predicate`
pub fn drop_until<S, P>(source: S, predicate: P) -> DropWhile<S, Not<P>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    DropWhile::new(source, Not::new(predicate))
}

/// Extension trait to add .drop(), .drop_while() and .drop_until() methods
pub trait DropExt: Sequence + Sized {
    fn drop(self, count: usize) -> Slice<Self> {
        drop(self, count)
    }

    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        DropWhile::new(self, predicate)
    }

    fn drop_until<P>(self, predicate: P) -> DropWhile<Self, Not<P>>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        DropWhile::new(self, Not::new(predicate))
    }
}

impl<S> DropExt for S where S: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{integers, source};
    use crate::take::take;

    fn collect<S: Sequence>(sequence: S) -> Vec<S::Item> {
        sequence.elements().collect()
    }

    #[test]
    fn test_drop_prefix() {
        assert_eq!(collect(drop(source(0..6), 4)), vec![4, 5]);
    }

    #[test]
    fn test_drop_everything() {
        assert!(collect(drop(vec!['a', 'b'], 2)).is_empty());
        assert!(collect(drop(vec!['a', 'b'], 9)).is_empty());
    }

    #[test]
    fn test_drop_zero_is_identity() {
        assert_eq!(collect(drop(vec![3, 1, 2], 0)), vec![3, 1, 2]);
    }

    #[test]
    fn test_drop_then_take_on_infinite_source() {
        let window = take(integers(0).drop(100), 3);
        assert_eq!(collect(window), vec![100, 101, 102]);
    }

    #[test]
    fn test_drop_while_keeps_later_matches() {
        let dropped = drop_while(vec![1, 2, 7, 1, 9], |n: &i32| *n < 5);
        assert_eq!(collect(dropped), vec![7, 1, 9]);
    }

    #[test]
    fn test_drop_until_keeps_match() {
        let dropped = source("  indented".chars()).drop_until(|c: &char| !c.is_whitespace());
        assert_eq!(collect(dropped).into_iter().collect::<String>(), "indented");
    }

    #[test]
    fn test_drop_while_all_match() {
        let dropped = drop_while(source(0..5), |_: &i32| true);
        assert!(collect(dropped).is_empty());
    }
}
