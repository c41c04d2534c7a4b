use crate::cursors::SubSequence;
use crate::error::{Result, SeqCombError};
use crate::sequence::Sequence;
use std::num::NonZeroUsize;

/// Sequence combinator that selects elements by position
///
/// Yields the elements at positions `start, start + step, ...` that are
/// strictly below `stop`. Backs [`slice`], [`rest`], [`take`](crate::take())
/// and [`drop`](crate::drop()).
#[derive(Debug, Clone)]
pub struct Slice<S> {
    source: S,
    start: usize,
    stop: Option<usize>,
    step: NonZeroUsize,
}

impl<S> Slice<S> {
    pub fn new(source: S, start: usize, stop: Option<usize>, step: usize) -> Result<Self> {
        let step = NonZeroUsize::new(step)
            .ok_or_else(|| SeqCombError::invalid_argument("Slice step must be greater than zero."))?;
        Ok(Slice {
            source,
            start,
            stop,
            step,
        })
    }

    pub(crate) fn contiguous(source: S, start: usize, stop: Option<usize>) -> Self {
        Slice {
            source,
            start,
            stop,
            step: NonZeroUsize::MIN,
        }
    }
}

impl<S: Sequence> Sequence for Slice<S> {
    type Item = S::Item;
    type Cursor = SubSequence<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SubSequence::new(self.source.cursor(), self.start, self.stop, self.step)
    }
}

/// Select every `step`-th element from `start` up to, not including, `stop`
///
/// `stop` of `None` runs to the end of the source. Fails with
/// `InvalidArgument` when `step` is zero.
pub fn slice<S: Sequence>(
    source: S,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<Slice<S>> {
    Slice::new(source, start, stop, step)
}

/// Everything but the first element
pub fn rest<S: Sequence>(source: S) -> Slice<S> {
    Slice::contiguous(source, 1, None)
}

/// Extension trait to add .slice() and .rest() methods to sequences
pub trait SliceExt: Sequence + Sized {
    fn slice(self, start: usize, stop: Option<usize>, step: usize) -> Result<Slice<Self>> {
        Slice::new(self, start, stop, step)
    }

    fn rest(self) -> Slice<Self> {
        rest(self)
    }
}

impl<S> SliceExt for S where S: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::probe::Probe;
    use crate::source::{integers, source};

    fn collect<S: Sequence>(sequence: S) -> Vec<S::Item> {
        sequence.elements().collect()
    }

    #[test]
    fn test_slice_with_step() {
        let sliced = slice(source(0..10), 2, Some(8), 2).unwrap();
        assert_eq!(collect(sliced), vec![2, 4, 6]);
    }

    #[test]
    fn test_slice_defaults_select_everything() {
        let sliced = slice(vec!['a', 'b', 'c'], 0, None, 1).unwrap();
        assert_eq!(collect(sliced), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_slice_start_past_end() {
        let sliced = slice(source(0..3), 5, None, 1).unwrap();
        assert!(collect(sliced).is_empty());
    }

    #[test]
    fn test_slice_stop_before_start() {
        let sliced = slice(source(0..10), 6, Some(2), 1).unwrap();
        assert!(collect(sliced).is_empty());
    }

    #[test]
    fn test_slice_zero_step_rejected() {
        let result = slice(source(0..10), 0, None, 0);
        assert!(matches!(result, Err(SeqCombError::InvalidArgument(_))));
    }

    #[test]
    fn test_slice_of_infinite_source() {
        let sliced = slice(integers(0), 10, Some(20), 3).unwrap();
        assert_eq!(collect(sliced), vec![10, 13, 16, 19]);
    }

    #[test]
    fn test_slice_does_not_pull_past_stop() {
        let probe = Probe::new((0..10).collect::<Vec<_>>());
        let sliced = slice(probe.clone(), 0, Some(3), 1).unwrap();

        let mut cursor = sliced.cursor();
        while cursor.has_next() {
            cursor.next().unwrap();
        }
        assert_eq!(probe.pulls(), 3);
    }

    #[test]
    fn test_rest_drops_first() {
        assert_eq!(collect(rest(source(1..=4))), vec![2, 3, 4]);
        assert!(collect(rest(Vec::<u8>::new())).is_empty());
        assert_eq!(collect(source(1..=2).rest()), vec![2]);
    }
}
