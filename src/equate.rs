use crate::map::map;
use crate::sequence::Sequence;
use crate::zip::zip;

/// Compare two sequences element by element
///
/// Yields `comparator(a, b)` for each aligned pair and stops with the shorter
/// source.
pub fn equate<A, B, F>(
    first: A,
    second: B,
    comparator: F,
) -> impl Sequence<Item = bool>
where
    A: Sequence,
    B: Sequence,
    F: Fn(&A::Item, &B::Item) -> bool + Clone,
{
    map(zip(first, second), move |(a, b): (A::Item, B::Item)| {
        comparator(&a, &b)
    })
}
