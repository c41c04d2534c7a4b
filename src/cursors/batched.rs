use crate::cursor::Cursor;
use crate::error::{Result, SeqCombError};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::rc::Rc;

type Spill<T> = Rc<RefCell<VecDeque<T>>>;

struct Shared<C: Cursor> {
    upstream: C,
    /// Elements the live batch may still take from upstream
    remaining: usize,
    /// Identifies the live batch; older batches only read their spill
    generation: u64,
    /// Buffer owned by the live batch, filled when it is left behind
    spill: Spill<C::Item>,
}

impl<C: Cursor> Shared<C> {
    /// Move the live batch's unread elements into its own buffer
    fn detach_live(&mut self) {
        if self.remaining == 0 {
            return;
        }
        let mut spill = self.spill.borrow_mut();
        while self.remaining > 0 && self.upstream.has_next() {
            match self.upstream.next() {
                Ok(item) => spill.push_back(item),
                Err(_) => break,
            }
            self.remaining -= 1;
        }
        self.remaining = 0;
        tracing::trace!(generation = self.generation, spilled = spill.len(), "batch left behind");
    }
}

/// Cursor that groups consecutive upstream elements into batches
///
/// Each batch is a [`Batch`] cursor reading straight from the shared upstream.
/// Moving on to the next batch hands whatever the previous batch left unread
/// over to that batch, so at most one batch worth of elements is ever held.
pub struct Batched<C: Cursor> {
    shared: Rc<RefCell<Shared<C>>>,
    size: NonZeroUsize,
}

impl<C: Cursor> Batched<C> {
    pub fn new(upstream: C, size: NonZeroUsize) -> Self {
        Batched {
            shared: Rc::new(RefCell::new(Shared {
                upstream,
                remaining: 0,
                generation: 0,
                spill: Rc::new(RefCell::new(VecDeque::new())),
            })),
            size,
        }
    }
}

impl<C: Cursor> Cursor for Batched<C> {
    type Item = Batch<C>;

    fn has_next(&mut self) -> bool {
        let mut shared = self.shared.borrow_mut();
        shared.detach_live();
        shared.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(SeqCombError::exhausted());
        }
        let mut shared = self.shared.borrow_mut();
        shared.generation += 1;
        shared.remaining = self.size.get();
        shared.spill = Rc::new(RefCell::new(VecDeque::new()));
        tracing::trace!(generation = shared.generation, size = self.size.get(), "starting batch");
        Ok(Batch {
            shared: Rc::clone(&self.shared),
            generation: shared.generation,
            spill: Rc::clone(&shared.spill),
        })
    }
}

/// One batch produced by [`Batched`]
///
/// Holds at most the batch size of elements; the last batch of an uneven
/// source is shorter. Reads from upstream while it is the newest batch and
/// from its own buffer once a later batch has started.
pub struct Batch<C: Cursor> {
    shared: Rc<RefCell<Shared<C>>>,
    generation: u64,
    spill: Spill<C::Item>,
}

impl<C: Cursor> Cursor for Batch<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if !self.spill.borrow().is_empty() {
            return true;
        }
        let mut shared = self.shared.borrow_mut();
        shared.generation == self.generation
            && shared.remaining > 0
            && shared.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        if let Some(item) = self.spill.borrow_mut().pop_front() {
            return Ok(item);
        }
        if !self.has_next() {
            return Err(SeqCombError::exhausted());
        }
        let mut shared = self.shared.borrow_mut();
        shared.remaining -= 1;
        shared.upstream.next()
    }
}
