//! Instrumented sequences for laziness tests

use crate::cursor::Cursor;
use crate::cursors::IterCursor;
use crate::error::Result;
use crate::sequence::Sequence;
use std::cell::Cell;
use std::rc::Rc;

/// Sequence that records how many cursors were started and how many
/// elements were pulled across all of them
#[derive(Clone)]
pub(crate) struct Probe<T> {
    items: Vec<T>,
    starts: Rc<Cell<usize>>,
    pulls: Rc<Cell<usize>>,
}

impl<T> Probe<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Probe {
            items,
            starts: Rc::new(Cell::new(0)),
            pulls: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn starts(&self) -> usize {
        self.starts.get()
    }

    pub(crate) fn pulls(&self) -> usize {
        self.pulls.get()
    }
}

pub(crate) struct ProbeCursor<T> {
    inner: IterCursor<std::vec::IntoIter<T>>,
    pulls: Rc<Cell<usize>>,
}

impl<T> Cursor for ProbeCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<T> {
        let item = self.inner.next()?;
        self.pulls.set(self.pulls.get() + 1);
        Ok(item)
    }
}

impl<T: Clone> Sequence for Probe<T> {
    type Item = T;
    type Cursor = ProbeCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        self.starts.set(self.starts.get() + 1);
        ProbeCursor {
            inner: IterCursor::new(self.items.clone().into_iter()),
            pulls: Rc::clone(&self.pulls),
        }
    }
}

/// Sequence whose traversal fails immediately
#[derive(Clone, Copy)]
pub(crate) struct Poisoned;

impl Sequence for Poisoned {
    type Item = i32;
    type Cursor = IterCursor<std::vec::IntoIter<i32>>;

    fn cursor(&self) -> Self::Cursor {
        panic!("poisoned sequence traversed")
    }
}

/// Sequence wrapper that cannot be cloned
pub(crate) struct Unclonable<S>(pub(crate) S);

impl<S: Sequence> Sequence for Unclonable<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        self.0.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian_product::{cartesian_product, cartesian_product_all};
    use crate::each::each;
    use crate::enumerate::{enumerate, index};
    use crate::slice::{rest, slice};
    use crate::zip::{zip, zip_all, zip3};

    #[test]
    fn test_building_over_failing_source_does_not_traverse() {
        let _zipped = zip(Poisoned, Poisoned);
        let _zipped3 = zip3(Poisoned, vec![1], Poisoned);
        let _zipped_all = zip_all(vec![Poisoned, Poisoned]).unwrap();
        let _product = cartesian_product(Poisoned, Poisoned);
        let _product_all = cartesian_product_all(vec![Poisoned, Poisoned, Poisoned]).unwrap();
        let _traced = each(Poisoned, |_: &i32| {});
        let _sliced = slice(Poisoned, 1, Some(4), 2).unwrap();
        let _rest = rest(Poisoned);
        let _numbered = enumerate(Poisoned);
        let _keyed = index(Poisoned, |n: i32| n * 2);
    }

    #[test]
    #[should_panic(expected = "poisoned")]
    fn test_zip_over_failing_source_fails_on_iteration() {
        zip(vec![1], Poisoned).cursor();
    }
}
