use crate::cursor::Cursor;
use crate::error::{Result, SeqCombError};
use crate::sequence::Sequence;

/// Cursor over the row-major cartesian product of a cursor and a sequence
///
/// For every element `x` of the outer cursor, in order, yields `(x, y)` for
/// every element `y` of a fresh traversal of the inner sequence. The outer
/// element is cloned once per pairing.
pub struct Product<A: Cursor, S: Sequence> {
    outer: A,
    inner: S,
    current: Option<(A::Item, S::Cursor)>,
}

impl<A: Cursor, S: Sequence> Product<A, S> {
    pub fn new(outer: A, inner: S) -> Self {
        Product {
            outer,
            inner,
            current: None,
        }
    }
}

impl<A, S> Cursor for Product<A, S>
where
    A: Cursor,
    A::Item: Clone,
    S: Sequence,
{
    type Item = (A::Item, S::Item);

    fn has_next(&mut self) -> bool {
        loop {
            if let Some((_, row)) = self.current.as_mut() {
                if row.has_next() {
                    return true;
                }
            }
            if !self.outer.has_next() {
                self.current = None;
                return false;
            }
            match self.outer.next() {
                Ok(head) => {
                    tracing::trace!("advancing product outer element");
                    self.current = Some((head, self.inner.cursor()));
                }
                Err(_) => {
                    self.current = None;
                    return false;
                }
            }
        }
    }

    fn next(&mut self) -> Result<Self::Item> {
        match (self.has_next(), self.current.as_mut()) {
            (true, Some((head, row))) => Ok((head.clone(), row.next()?)),
            _ => Err(SeqCombError::exhausted()),
        }
    }
}
