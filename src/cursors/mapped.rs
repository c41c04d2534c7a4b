use crate::cursor::Cursor;
use crate::error::Result;

/// Cursor that transforms each upstream element with a mapping function
///
/// One output per input, in order. The mapper runs when the element is pulled.
pub struct Mapped<C, F> {
    upstream: C,
    mapper: F,
}

impl<C, F> Mapped<C, F> {
    pub fn new(upstream: C, mapper: F) -> Self {
        Mapped { upstream, mapper }
    }
}

impl<C, F, U> Cursor for Mapped<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.upstream.next().map(&self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqCombError;
    use crate::cursors::IterCursor;

    #[test]
    fn test_mapped_transforms_in_order() {
        let mut cursor = Mapped::new(IterCursor::new(1..4), |n: i32| n * n);

        assert_eq!(cursor.next().unwrap(), 1);
        assert_eq!(cursor.next().unwrap(), 4);
        assert_eq!(cursor.next().unwrap(), 9);
        assert_eq!(cursor.next(), Err(SeqCombError::Exhausted));
    }

    #[test]
    fn test_mapped_keeps_absent_results() {
        let cursor = Mapped::new(IterCursor::new(1..5), |n: i32| (n % 2 == 0).then_some(n));

        let collected: Vec<Option<i32>> = cursor.elements().collect();
        assert_eq!(collected, vec![None, Some(2), None, Some(4)]);
    }

    #[test]
    fn test_mapper_runs_only_on_pull() {
        let calls = std::cell::Cell::new(0);
        let mut cursor = Mapped::new(IterCursor::new(0..10), |n: i32| {
            calls.set(calls.get() + 1);
            n
        });

        assert!(cursor.has_next());
        assert_eq!(calls.get(), 0);
        cursor.next().unwrap();
        assert_eq!(calls.get(), 1);
    }
}
