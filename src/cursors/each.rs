use crate::cursor::Cursor;
use crate::error::Result;

/// Pass-through cursor that runs a procedure on every element as it is pulled
pub struct Each<C, F> {
    upstream: C,
    procedure: F,
}

impl<C, F> Each<C, F> {
    pub fn new(upstream: C, procedure: F) -> Self {
        Each {
            upstream,
            procedure,
        }
    }
}

impl<C, F> Cursor for Each<C, F>
where
    C: Cursor,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        let item = self.upstream.next()?;
        (self.procedure)(&item);
        Ok(item)
    }
}
