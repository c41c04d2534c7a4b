use crate::cursors::Mapped;
use crate::sequence::Sequence;

/// Sequence combinator that transforms each element using a mapping function
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, mapper: F) -> Self {
        Map { source, mapper }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = Mapped<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        Mapped::new(self.source.cursor(), self.mapper.clone())
    }
}

/// Convenience function to create a Map sequence
pub fn map<S, F, U>(source: S, mapper: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    Map::new(source, mapper)
}

/// Extension trait to add .map() method support for sequences
pub trait MapExt: Sequence + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U + Clone,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all sequences
impl<S> MapExt for S where S: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::filter::FilterExt;
    use crate::probe::{Poisoned, Probe};
    use crate::source::source;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Digit(u32),
        Letter(char),
    }

    #[test]
    fn test_map_to_enum() {
        let tokens = map(source("a1b".chars()), |c: char| match c.to_digit(10) {
            Some(digit) => Token::Digit(digit),
            None => Token::Letter(c),
        });

        let collected: Vec<Token> = tokens.elements().collect();
        assert_eq!(
            collected,
            vec![Token::Letter('a'), Token::Digit(1), Token::Letter('b')]
        );
    }

    #[test]
    fn test_map_chaining() {
        let parsed = source(vec!["1", "22", "333"])
            .map(|s: &str| s.len())
            .map(|n| n * 10)
            .map(|n| format!("len {}", n));

        let collected: Vec<String> = parsed.elements().collect();
        assert_eq!(collected, vec!["len 10", "len 20", "len 30"]);
    }

    #[test]
    fn test_map_preserves_cardinality_with_absent_results() {
        let halves = map(source(1..=4), |n: i32| if n % 2 == 0 { Some(n / 2) } else { None });

        let collected: Vec<Option<i32>> = halves.elements().collect();
        assert_eq!(collected, vec![None, Some(1), None, Some(2)]);
    }

    #[test]
    fn test_map_is_lazy() {
        let probe = Probe::new(vec![1, 2, 3]);
        let doubled = map(probe.clone(), |n: i32| n * 2);

        assert_eq!(probe.starts(), 0);
        let mut cursor = doubled.cursor();
        assert_eq!(probe.pulls(), 0);
        assert_eq!(cursor.next().unwrap(), 2);
        assert_eq!(probe.pulls(), 1);
    }

    #[test]
    fn test_map_over_failing_source_constructs() {
        let _sequence = map(Poisoned, |n: i32| n + 1).filter(|n: &i32| *n > 0);
    }

    #[test]
    #[should_panic(expected = "poisoned")]
    fn test_map_over_failing_source_fails_on_iteration() {
        let sequence = map(Poisoned, |n: i32| n + 1);
        sequence.cursor();
    }

    #[test]
    fn test_reiteration_reruns_mapper() {
        let calls = std::cell::Cell::new(0);
        let counted = map(source(0..3), |n: i32| {
            calls.set(calls.get() + 1);
            n
        });

        assert_eq!(counted.elements().count(), 3);
        assert_eq!(counted.elements().count(), 3);
        assert_eq!(calls.get(), 6);
    }
}
