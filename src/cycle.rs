use crate::cursors::Cyclic;
use crate::sequence::Sequence;

/// Sequence combinator that replays its source pass after pass
///
/// Every pass starts a fresh traversal of the source, which is why the source
/// is kept by value and must be `Clone`. Unbounded cycles of a non-empty
/// source never end; a pass that produces nothing ends the cycle early.
#[derive(Debug, Clone)]
pub struct Cycle<S> {
    source: S,
    passes: Option<usize>,
}

impl<S> Cycle<S> {
    pub fn new(source: S, passes: Option<usize>) -> Self {
        Cycle { source, passes }
    }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;
    type Cursor = Cyclic<S>;

    fn cursor(&self) -> Self::Cursor {
        let source = self.source.clone();
        match self.passes {
            Some(passes) => Cyclic::bounded(source, passes),
            None => Cyclic::unbounded(source),
        }
    }
}

/// Repeat `source` forever
pub fn cycle<S: Sequence + Clone>(source: S) -> Cycle<S> {
    Cycle::new(source, None)
}

/// Concatenate `passes` traversals of `source`
pub fn repeat<S: Sequence + Clone>(source: S, passes: usize) -> Cycle<S> {
    Cycle::new(source, Some(passes))
}

/// Extension trait to add .cycle() and .repeat() methods
pub trait CycleExt: Sequence + Clone {
    fn cycle(self) -> Cycle<Self> {
        cycle(self)
    }

    fn repeat(self, passes: usize) -> Cycle<Self> {
        repeat(self, passes)
    }
}

impl<S> CycleExt for S where S: Sequence + Clone {}
