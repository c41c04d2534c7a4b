use crate::cursors::{Batch, Batched};
use crate::error::{Result, SeqCombError};
use crate::sequence::Sequence;
use std::num::NonZeroUsize;

/// Sequence combinator that groups consecutive elements into batches
///
/// Each element is itself a lazy [`Batch`] cursor reading straight from the
/// source. Batches may be read in any order: advancing to the next batch moves
/// whatever the previous one left unread into that batch, so at most one
/// batch worth of elements is buffered at a time.
#[derive(Debug, Clone)]
pub struct Batches<S> {
    source: S,
    size: NonZeroUsize,
}

impl<S> Batches<S> {
    pub fn new(source: S, size: usize) -> Result<Self> {
        let size = NonZeroUsize::new(size)
            .ok_or_else(|| SeqCombError::invalid_argument("Batch size must be greater than zero."))?;
        Ok(Batches { source, size })
    }
}

impl<S: Sequence> Sequence for Batches<S> {
    type Item = Batch<S::Cursor>;
    type Cursor = Batched<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Batched::new(self.source.cursor(), self.size)
    }
}

/// Group `source` into batches of `size` elements
///
/// The final batch is shorter when the source length is not a multiple of
/// `size`. Fails with `InvalidArgument` when `size` is zero.
pub fn batch<S: Sequence>(source: S, size: usize) -> Result<Batches<S>> {
    Batches::new(source, size)
}

/// Extension trait to add .batch() method support for sequences
pub trait BatchExt: Sequence + Sized {
    fn batch(self, size: usize) -> Result<Batches<Self>> {
        Batches::new(self, size)
    }
}

impl<S> BatchExt for S where S: Sequence {}
