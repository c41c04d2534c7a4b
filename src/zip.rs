//! Lockstep combination of several sequences
//!
//! [`zip`] through [`zip9`] combine sequences of different element types into
//! tuples. [`zip_all`] combines any number of sequences that share an element
//! type into vectors. Every zip ends as soon as its shortest source does.

use crate::cursors::{ZipCursors, Zipped};
use crate::error::{Result, SeqCombError};
use crate::sequence::Sequence;

/// A group of sequences that can start one cursor each
pub trait ZipSequences {
    type Cursors: ZipCursors;

    fn cursors(&self) -> Self::Cursors;
}

impl<S: Sequence> ZipSequences for Vec<S> {
    type Cursors = Vec<S::Cursor>;

    fn cursors(&self) -> Self::Cursors {
        self.iter().map(Sequence::cursor).collect()
    }
}

macro_rules! zip_sequences_tuple {
    ($($sequence:ident $var:ident),+) => {
        impl<$($sequence: Sequence),+> ZipSequences for ($($sequence,)+) {
            type Cursors = ($($sequence::Cursor,)+);

            fn cursors(&self) -> Self::Cursors {
                let ($($var,)+) = self;
                ($($var.cursor(),)+)
            }
        }
    };
}

zip_sequences_tuple!(A a, B b);
zip_sequences_tuple!(A a, B b, C c);
zip_sequences_tuple!(A a, B b, C c, D d);
zip_sequences_tuple!(A a, B b, C c, D d, E e);
zip_sequences_tuple!(A a, B b, C c, D d, E e, F f);
zip_sequences_tuple!(A a, B b, C c, D d, E e, F f, G g);
zip_sequences_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);
zip_sequences_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i);

/// Sequence combinator that yields one element from each source per step
#[derive(Debug, Clone)]
pub struct Zip<T> {
    sources: T,
}

impl<T: ZipSequences> Zip<T> {
    pub fn new(sources: T) -> Self {
        Zip { sources }
    }
}

impl<T: ZipSequences> Sequence for Zip<T> {
    type Item = <T::Cursors as ZipCursors>::Item;
    type Cursor = Zipped<T::Cursors>;

    fn cursor(&self) -> Self::Cursor {
        Zipped::new(self.sources.cursors())
    }
}

/// Pair up the elements of two sequences
pub fn zip<A: Sequence, B: Sequence>(a: A, b: B) -> Zip<(A, B)> {
    Zip::new((a, b))
}

macro_rules! zip_fn {
    ($(#[$doc:meta])* $name:ident, $($sequence:ident $var:ident),+) => {
        $(#[$doc])*
        pub fn $name<$($sequence: Sequence),+>($($var: $sequence),+) -> Zip<($($sequence,)+)> {
            Zip::new(($($var,)+))
        }
    };
}

zip_fn!(
    /// Combine three sequences into triples
    zip3, A a, B b, C c
);
zip_fn!(
    /// Combine four sequences into 4-tuples
    zip4, A a, B b, C c, D d
);
zip_fn!(zip5, A a, B b, C c, D d, E e);
zip_fn!(zip6, A a, B b, C c, D d, E e, F f);
zip_fn!(zip7, A a, B b, C c, D d, E e, F f, G g);
zip_fn!(zip8, A a, B b, C c, D d, E e, F f, G g, H h);
zip_fn!(zip9, A a, B b, C c, D d, E e, F f, G g, H h, I i);

/// Combine any number of same-typed sequences into vectors
///
/// Fails with `InvalidArgument` when given fewer than two sources.
pub fn zip_all<S: Sequence>(sources: Vec<S>) -> Result<Zip<Vec<S>>> {
    if sources.len() < 2 {
        return Err(SeqCombError::invalid_argument(format!(
            "Zip needs at least two sources, got {}.",
            sources.len()
        )));
    }
    Ok(Zip::new(sources))
}

/// Extension trait to add .zip() method support for sequences
pub trait ZipExt: Sequence + Sized {
    fn zip<B: Sequence>(self, other: B) -> Zip<(Self, B)> {
        zip(self, other)
    }
}

impl<S> ZipExt for S where S: Sequence {}
