use crate::cursor::Cursor;
use crate::cursors::{Chained, Flattened};
use crate::sequence::Sequence;

/// Sequence combinator that yields one sequence followed by another
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chain { first, second }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = Chained<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Chained::new(self.first.cursor(), self.second.cursor())
    }
}

/// All elements of `first`, then all elements of `second`
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain::new(first, second)
}

/// Sequence combinator that concatenates the cursors its source yields
///
/// Useful for flattening [`batch`](crate::batch()) output or any sequence of
/// cursors back into a single stream.
#[derive(Debug, Clone)]
pub struct Concat<S> {
    source: S,
}

impl<S> Concat<S> {
    pub fn new(source: S) -> Self {
        Concat { source }
    }
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
    S::Item: Cursor,
{
    type Item = <S::Item as Cursor>::Item;
    type Cursor = Flattened<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Flattened::new(self.source.cursor())
    }
}

/// Flatten a sequence of cursors into the sequence of their elements
pub fn concat<S>(source: S) -> Concat<S>
where
    S: Sequence,
    S::Item: Cursor,
{
    Concat::new(source)
}

/// Extension trait to add .chain() method support for sequences
pub trait ChainExt: Sequence + Sized {
    fn chain<B>(self, second: B) -> Chain<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Chain::new(self, second)
    }
}

impl<S> ChainExt for S where S: Sequence {}
