use crate::cursor::Cursor;
use crate::error::{Result, SeqCombError};

/// Cursor that yields everything from one cursor and then everything from
/// another
pub struct Chained<A, B> {
    first: A,
    second: B,
    on_second: bool,
}

impl<A, B> Chained<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chained {
            first,
            second,
            on_second: false,
        }
    }
}

impl<A, B> Cursor for Chained<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn has_next(&mut self) -> bool {
        if !self.on_second {
            if self.first.has_next() {
                return true;
            }
            self.on_second = true;
        }
        self.second.has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        if self.has_next() && !self.on_second {
            self.first.next()
        } else {
            self.second.next()
        }
    }
}

/// Cursor that concatenates the cursors produced by an outer cursor
///
/// Inner cursors are taken from the outer one only when the current inner
/// cursor runs dry.
pub struct Flattened<C: Cursor> {
    outer: C,
    current: Option<C::Item>,
}

impl<C: Cursor> Flattened<C> {
    pub fn new(outer: C) -> Self {
        Flattened {
            outer,
            current: None,
        }
    }
}

impl<C> Cursor for Flattened<C>
where
    C: Cursor,
    C::Item: Cursor,
{
    type Item = <C::Item as Cursor>::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if inner.has_next() {
                    return true;
                }
            }
            if !self.outer.has_next() {
                self.current = None;
                return false;
            }
            self.current = self.outer.next().ok();
        }
    }

    fn next(&mut self) -> Result<Self::Item> {
        match (self.has_next(), self.current.as_mut()) {
            (true, Some(inner)) => inner.next(),
            _ => Err(SeqCombError::exhausted()),
        }
    }
}
