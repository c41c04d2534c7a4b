use crate::cursor::Cursor;
use crate::error::{Result, SeqCombError};
use crate::sequence::Sequence;

/// Cursor that replays its source sequence pass after pass
///
/// Each pass asks the source for a fresh cursor. With no pass limit the
/// cursor is infinite for any non-empty restartable source. A pass that
/// yields nothing ends the cycle, so an empty source, or one that can only be
/// traversed once, does not spin forever.
pub struct Cyclic<S: Sequence> {
    source: S,
    current: Option<S::Cursor>,
    /// Passes that may still be started, `None` for unbounded
    passes_left: Option<usize>,
    yielded_this_pass: bool,
    finished: bool,
}

impl<S: Sequence> Cyclic<S> {
    /// Repeat the source forever
    pub fn unbounded(source: S) -> Self {
        Self::with_passes(source, None)
    }

    /// Repeat the source exactly `passes` times
    pub fn bounded(source: S, passes: usize) -> Self {
        Self::with_passes(source, Some(passes))
    }

    fn with_passes(source: S, passes_left: Option<usize>) -> Self {
        Cyclic {
            source,
            current: None,
            passes_left,
            yielded_this_pass: false,
            finished: false,
        }
    }
}

impl<S: Sequence> Cursor for Cyclic<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        while !self.finished {
            match self.current.as_mut() {
                None => {
                    match self.passes_left.as_mut() {
                        Some(0) => {
                            self.finished = true;
                            continue;
                        }
                        Some(left) => *left -= 1,
                        None => {}
                    }
                    tracing::trace!(passes_left = ?self.passes_left, "starting cycle pass");
                    self.current = Some(self.source.cursor());
                    self.yielded_this_pass = false;
                }
                Some(cursor) => {
                    if cursor.has_next() {
                        return true;
                    }
                    if !self.yielded_this_pass {
                        self.finished = true;
                    }
                    self.current = None;
                }
            }
        }
        false
    }

    fn next(&mut self) -> Result<Self::Item> {
        match (self.has_next(), self.current.as_mut()) {
            (true, Some(cursor)) => {
                self.yielded_this_pass = true;
                cursor.next()
            }
            _ => Err(SeqCombError::exhausted()),
        }
    }
}
