use super::lookahead::Lookahead;
use crate::cursor::Cursor;
use crate::error::Result;

/// Cursor over any standard library iterator
///
/// This is the boundary between caller-supplied data and the combinators:
/// it adds the one-element lookahead that `has_next` needs and fuses the
/// iterator so exhaustion is permanent.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    lookahead: Lookahead<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor {
            iter,
            lookahead: Lookahead::new(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        let iter = &mut self.iter;
        self.lookahead.fill(|| iter.next())
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take()
    }
}
