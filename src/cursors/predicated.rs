use super::lookahead::Lookahead;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::predicate::Predicate;

/// Cursor that yields upstream elements while a predicate holds
///
/// The first failing element ends the cursor for good; later elements are
/// never examined even if they would match.
pub struct Predicated<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Lookahead<C::Item>,
}

impl<C: Cursor, P> Predicated<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        Predicated {
            upstream,
            predicate,
            lookahead: Lookahead::new(),
        }
    }
}

impl<C, P> Cursor for Predicated<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let predicate = &self.predicate;
        self.lookahead.fill(|| {
            if !upstream.has_next() {
                return None;
            }
            let item = upstream.next().ok()?;
            predicate.test(&item).then_some(item)
        })
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take()
    }
}

/// Cursor that skips the leading run of upstream elements satisfying a
/// predicate and yields everything after it
pub struct Dropping<C: Cursor, P> {
    upstream: C,
    predicate: P,
    dropping: bool,
    lookahead: Lookahead<C::Item>,
}

impl<C: Cursor, P> Dropping<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        Dropping {
            upstream,
            predicate,
            dropping: true,
            lookahead: Lookahead::new(),
        }
    }
}

impl<C, P> Cursor for Dropping<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let predicate = &self.predicate;
        let dropping = &mut self.dropping;
        self.lookahead.fill(|| {
            while upstream.has_next() {
                let item = upstream.next().ok()?;
                if *dropping && predicate.test(&item) {
                    continue;
                }
                *dropping = false;
                return Some(item);
            }
            None
        })
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take()
    }
}
