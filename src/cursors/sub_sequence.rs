use super::lookahead::Lookahead;
use crate::cursor::Cursor;
use crate::error::Result;
use std::num::NonZeroUsize;

/// Cursor over a slice of the upstream's logical output
///
/// Yields the elements at indices `start, start + step, ...` that are below
/// `stop`. Indices count elements produced by the upstream cursor, not any
/// backing storage. Once `stop` is reached the upstream is left untouched.
pub struct SubSequence<C: Cursor> {
    upstream: C,
    start: usize,
    stop: Option<usize>,
    step: NonZeroUsize,
    /// Index of the next element the upstream will produce
    index: usize,
    lookahead: Lookahead<C::Item>,
}

impl<C: Cursor> SubSequence<C> {
    pub fn new(upstream: C, start: usize, stop: Option<usize>, step: NonZeroUsize) -> Self {
        SubSequence {
            upstream,
            start,
            stop,
            step,
            index: 0,
            lookahead: Lookahead::new(),
        }
    }
}

impl<C: Cursor> Cursor for SubSequence<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let index = &mut self.index;
        let (start, stop, step) = (self.start, self.stop, self.step.get());
        self.lookahead.fill(|| {
            loop {
                if stop.is_some_and(|stop| *index >= stop) {
                    return None;
                }
                if !upstream.has_next() {
                    return None;
                }
                let item = upstream.next().ok()?;
                let position = *index;
                *index += 1;
                if position >= start && (position - start) % step == 0 {
                    return Some(item);
                }
            }
        })
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take()
    }
}
