use super::lookahead::Lookahead;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::predicate::Predicate;

/// Cursor that yields only the upstream elements satisfying a predicate
///
/// Non-matching elements are skipped while looking for the next match.
pub struct Filtered<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Lookahead<C::Item>,
}

impl<C: Cursor, P> Filtered<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        Filtered {
            upstream,
            predicate,
            lookahead: Lookahead::new(),
        }
    }
}

impl<C, P> Cursor for Filtered<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let predicate = &self.predicate;
        self.lookahead.fill(|| {
            while upstream.has_next() {
                let item = upstream.next().ok()?;
                if predicate.test(&item) {
                    return Some(item);
                }
            }
            None
        })
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take()
    }
}
