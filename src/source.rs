//! Sequences over caller-supplied data
//!
//! Slices, arrays and vectors are sequences of clones of their elements.
//! [`Source`] lifts any cloneable `IntoIterator` (ranges, maps over ranges,
//! collections) into a restartable sequence, [`SinglePass`] wraps an iterator
//! that can only be walked once, and [`Integers`] counts upwards forever.

use crate::cursors::IterCursor;
use crate::sequence::Sequence;
use std::cell::RefCell;
use std::rc::Rc;

impl<'a, T: Clone> Sequence for &'a [T] {
    type Item = T;
    type Cursor = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.iter().cloned())
    }
}

impl<'a, T: Clone> Sequence for &'a Vec<T> {
    type Item = T;
    type Cursor = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.iter().cloned())
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor = IterCursor<std::vec::IntoIter<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone().into_iter())
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Cursor = IterCursor<std::array::IntoIter<T, N>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone().into_iter())
    }
}

/// Restartable sequence backed by a cloneable iterable
///
/// Every cursor walks a fresh clone, so ranges and iterator chains can be
/// traversed any number of times.
#[derive(Debug, Clone)]
pub struct Source<I> {
    iterable: I,
}

impl<I> Source<I> {
    pub fn new(iterable: I) -> Self {
        Source { iterable }
    }
}

impl<I> Sequence for Source<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.iterable.clone().into_iter())
    }
}

/// Convenience function to create a restartable [`Source`]
pub fn source<I>(iterable: I) -> Source<I>
where
    I: IntoIterator + Clone,
{
    Source::new(iterable)
}

/// Sequence that can only be traversed once
///
/// The first cursor takes the iterator; every later cursor, including those
/// of clones, is empty. Models streams that cannot be rewound.
#[derive(Debug)]
pub struct SinglePass<I> {
    iter: Rc<RefCell<Option<I>>>,
}

impl<I> Clone for SinglePass<I> {
    fn clone(&self) -> Self {
        SinglePass {
            iter: Rc::clone(&self.iter),
        }
    }
}

impl<I: Iterator> SinglePass<I> {
    pub fn new(iter: I) -> Self {
        SinglePass {
            iter: Rc::new(RefCell::new(Some(iter))),
        }
    }
}

impl<I: Iterator> Sequence for SinglePass<I> {
    type Item = I::Item;
    type Cursor = IterCursor<std::iter::Flatten<std::option::IntoIter<I>>>;

    fn cursor(&self) -> Self::Cursor {
        let iter = self.iter.borrow_mut().take();
        IterCursor::new(iter.into_iter().flatten())
    }
}

/// Convenience function to create a [`SinglePass`] sequence
pub fn single_pass<I>(iterable: I) -> SinglePass<I::IntoIter>
where
    I: IntoIterator,
{
    SinglePass::new(iterable.into_iter())
}

/// Infinite sequence of increasing integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integers {
    start: usize,
}

impl Integers {
    pub fn new(start: usize) -> Self {
        Integers { start }
    }
}

impl Sequence for Integers {
    type Item = usize;
    type Cursor = IterCursor<std::ops::RangeFrom<usize>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.start..)
    }
}

/// Integers counting up from `start`
pub fn integers(start: usize) -> Integers {
    Integers::new(start)
}
