use crate::error::Result;

/// Stateful, single-pass pull source of elements
///
/// A cursor is the per-iteration half of a [`Sequence`](crate::Sequence): every
/// combinator hands out a cursor that owns the cursors it reads from and only
/// pulls from them when asked.
pub trait Cursor {
    /// The type of elements this cursor produces
    type Item;

    /// Check whether another element is available without consuming it
    ///
    /// Implementations may pull one element from upstream into a lookahead
    /// slot; that element is still returned by the next call to `next`.
    fn has_next(&mut self) -> bool;

    /// Consume and return the next element
    ///
    /// Returns `SeqCombError::Exhausted` once nothing is left, and keeps doing
    /// so on every later call.
    fn next(&mut self) -> Result<Self::Item>;

    /// Adapt this cursor into a standard library iterator
    fn elements(self) -> Elements<Self>
    where
        Self: Sized,
    {
        Elements { cursor: self }
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }
}

/// Iterator over the remaining elements of a cursor
#[derive(Debug, Clone)]
pub struct Elements<C> {
    cursor: C,
}

impl<C> Elements<C> {
    /// Give back the wrapped cursor
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Elements<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            self.cursor.next().ok()
        } else {
            None
        }
    }
}
