use crate::cursor::{Cursor, Elements};
use std::rc::Rc;

/// Core trait for lazy sequences
///
/// A sequence is an immutable description of a stream of elements. Asking it
/// for a cursor starts a fresh, independent traversal; all position state
/// lives in the cursor. Combinators take sequences and return new sequences
/// without touching any element until a cursor is driven.
///
/// Combinators that need to traverse a source more than once (`cycle`,
/// `repeat`, the inner sources of `cartesian_product`, both halves of
/// `partition`) keep a clone of it, so those sources must be `Clone`. Wrap a
/// sequence in [`Rc`] to share it instead of copying.
pub trait Sequence {
    /// The type of elements produced
    type Item;

    /// The cursor type handed out for one traversal
    type Cursor: Cursor<Item = Self::Item>;

    /// Start a new traversal positioned at the first element
    fn cursor(&self) -> Self::Cursor;

    /// Start a new traversal as a standard library iterator
    fn elements(&self) -> Elements<Self::Cursor> {
        self.cursor().elements()
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::cycle;
    use crate::source::source;
    use crate::zip::zip;

    #[test]
    fn test_each_cursor_is_independent() {
        let data = vec![1, 2, 3];

        let mut first = data.cursor();
        let mut second = data.cursor();

        assert_eq!(first.next().unwrap(), 1);
        assert_eq!(first.next().unwrap(), 2);
        assert_eq!(second.next().unwrap(), 1);
        assert_eq!(first.next().unwrap(), 3);
        assert_eq!(second.next().unwrap(), 2);
    }

    #[test]
    fn test_interleaved_cursors_of_composite() {
        let pairs = zip(cycle(vec!['a', 'b']), source(0..5));

        let mut first = pairs.cursor();
        let mut second = pairs.cursor();

        assert_eq!(first.next().unwrap(), ('a', 0));
        assert_eq!(first.next().unwrap(), ('b', 1));
        assert_eq!(second.next().unwrap(), ('a', 0));
        assert_eq!(first.next().unwrap(), ('a', 2));
        assert!(second.has_next());
        assert_eq!(second.next().unwrap(), ('b', 1));
        assert_eq!(first.elements().collect::<Vec<_>>(), vec![('b', 3), ('a', 4)]);
        assert_eq!(second.elements().count(), 3);
    }

    #[test]
    fn test_shared_sequence() {
        let data = Rc::new(vec!['x', 'y']);
        let shared = Rc::clone(&data);

        assert_eq!(shared.elements().collect::<Vec<_>>(), vec!['x', 'y']);
        assert_eq!(data.elements().collect::<Vec<_>>(), vec!['x', 'y']);
    }
}
