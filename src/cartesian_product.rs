//! Cartesian products in row-major order
//!
//! The first source varies slowest and the last fastest. Every source after
//! the first is traversed once per combination of the sources before it, so
//! those sources must be `Clone` and restartable. The first source is
//! traversed exactly once per traversal of the product.

use crate::cursor::Cursor;
use crate::cursors::{Mapped, Product};
use crate::error::{Result, SeqCombError};
use crate::map::map;
use crate::sequence::Sequence;
use std::rc::Rc;

/// Sequence combinator over the cartesian product of two sequences
#[derive(Debug, Clone)]
pub struct CartesianProduct<A, B> {
    first: A,
    second: B,
}

impl<A, B> CartesianProduct<A, B> {
    pub fn new(first: A, second: B) -> Self {
        CartesianProduct { first, second }
    }
}

impl<A, B> Sequence for CartesianProduct<A, B>
where
    A: Sequence,
    A::Item: Clone,
    B: Sequence + Clone,
{
    type Item = (A::Item, B::Item);
    type Cursor = Product<A::Cursor, B>;

    fn cursor(&self) -> Self::Cursor {
        Product::new(self.first.cursor(), self.second.clone())
    }
}

/// Every pair `(a, b)` with `a` from `first` and `b` from `second`
pub fn cartesian_product<A, B>(first: A, second: B) -> CartesianProduct<A, B>
where
    A: Sequence,
    A::Item: Clone,
    B: Sequence + Clone,
{
    CartesianProduct::new(first, second)
}

macro_rules! nested_product {
    ($last:ident) => { $last };
    ($first:ident, $($rest:ident),+) => {
        cartesian_product($first, nested_product!($($rest),+))
    };
}

macro_rules! nested_pattern {
    ($last:ident) => { $last };
    ($first:ident, $($rest:ident),+) => { ($first, nested_pattern!($($rest),+)) };
}

macro_rules! cartesian_product_fn {
    ($name:ident, $head:ident $head_var:ident, $($tail:ident $tail_var:ident),+) => {
        /// Every combination of one element from each source, as a flat tuple
        pub fn $name<$head, $($tail),+>(
            $head_var: $head,
            $($tail_var: $tail),+
        ) -> impl Sequence<Item = ($head::Item, $($tail::Item),+)>
        where
            $head: Sequence,
            $head::Item: Clone,
            $($tail: Sequence + Clone, $tail::Item: Clone),+
        {
            map(
                nested_product!($head_var, $($tail_var),+),
                |nested_pattern!($head_var, $($tail_var),+)| ($head_var, $($tail_var),+),
            )
        }
    };
}

cartesian_product_fn!(cartesian_product3, A a, B b, C c);
cartesian_product_fn!(cartesian_product4, A a, B b, C c, D d);
cartesian_product_fn!(cartesian_product5, A a, B b, C c, D d, E e);
cartesian_product_fn!(cartesian_product6, A a, B b, C c, D d, E e, F f);
cartesian_product_fn!(cartesian_product7, A a, B b, C c, D d, E e, F f, G g);
cartesian_product_fn!(cartesian_product8, A a, B b, C c, D d, E e, F f, G g, H h);
cartesian_product_fn!(cartesian_product9, A a, B b, C c, D d, E e, F f, G g, H h, I i);

type Pairing<T> = fn((T, T)) -> Vec<T>;
type Prepending<T> = fn((T, Vec<T>)) -> Vec<T>;

fn pair<T>((first, second): (T, T)) -> Vec<T> {
    vec![first, second]
}

fn prepend<T>((head, mut tail): (T, Vec<T>)) -> Vec<T> {
    tail.insert(0, head);
    tail
}

/// Sequence combinator over the cartesian product of any number of
/// same-typed sequences, yielding each combination as a vector
#[derive(Debug)]
pub struct CartesianProductAll<S> {
    sources: Rc<[S]>,
    /// Position of the slowest-varying source this product covers
    offset: usize,
}

impl<S> Clone for CartesianProductAll<S> {
    fn clone(&self) -> Self {
        CartesianProductAll {
            sources: Rc::clone(&self.sources),
            offset: self.offset,
        }
    }
}

impl<S> CartesianProductAll<S> {
    pub fn new(sources: Vec<S>) -> Result<Self> {
        if sources.len() < 2 {
            return Err(SeqCombError::invalid_argument(format!(
                "Cartesian product needs at least two sources, got {}.",
                sources.len()
            )));
        }
        Ok(CartesianProductAll {
            sources: sources.into(),
            offset: 0,
        })
    }
}

/// Cursor of a [`CartesianProductAll`], one level per source
pub enum ProductRows<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    /// The last two sources
    Pair(Mapped<Product<S::Cursor, S>, Pairing<S::Item>>),
    /// One source in front of the product of the rest
    Nested(Mapped<Product<S::Cursor, CartesianProductAll<S>>, Prepending<S::Item>>),
}

impl<S> Cursor for ProductRows<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn has_next(&mut self) -> bool {
        match self {
            ProductRows::Pair(rows) => rows.has_next(),
            ProductRows::Nested(rows) => rows.has_next(),
        }
    }

    fn next(&mut self) -> Result<Self::Item> {
        match self {
            ProductRows::Pair(rows) => rows.next(),
            ProductRows::Nested(rows) => rows.next(),
        }
    }
}

impl<S> Sequence for CartesianProductAll<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Cursor = Box<ProductRows<S>>;

    fn cursor(&self) -> Self::Cursor {
        let sources = &self.sources[self.offset..];
        let head = sources[0].cursor();
        let rows = if sources.len() == 2 {
            let pairing: Pairing<S::Item> = pair;
            ProductRows::Pair(Mapped::new(Product::new(head, sources[1].clone()), pairing))
        } else {
            let tail = CartesianProductAll {
                sources: Rc::clone(&self.sources),
                offset: self.offset + 1,
            };
            let prepending: Prepending<S::Item> = prepend;
            ProductRows::Nested(Mapped::new(Product::new(head, tail), prepending))
        };
        Box::new(rows)
    }
}

/// Every combination of one element from each source, as a vector
///
/// Fails with `InvalidArgument` when given fewer than two sources.
pub fn cartesian_product_all<S>(sources: Vec<S>) -> Result<CartesianProductAll<S>>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    CartesianProductAll::new(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Probe, Unclonable};
    use crate::source::{integers, source};
    use crate::take::take;

    fn collect<S: Sequence>(sequence: S) -> Vec<S::Item> {
        sequence.elements().collect()
    }

    #[test]
    fn test_pairs_row_major() {
        let pairs = cartesian_product(vec![1, 2], vec!['a', 'b', 'c']);
        assert_eq!(
            collect(pairs),
            vec![(1, 'a'), (1, 'b'), (1, 'c'), (2, 'a'), (2, 'b'), (2, 'c')]
        );
    }

    #[test]
    fn test_empty_factor_gives_empty_product() {
        assert!(collect(cartesian_product(Vec::<u8>::new(), vec![1])).is_empty());
        assert!(collect(cartesian_product(vec![1], Vec::<u8>::new())).is_empty());
    }

    #[test]
    fn test_triples_are_flat() {
        let triples = cartesian_product3(vec![0, 1], vec!['x'], vec![true, false]);
        assert_eq!(
            collect(triples),
            vec![
                (0, 'x', true),
                (0, 'x', false),
                (1, 'x', true),
                (1, 'x', false)
            ]
        );
    }

    #[test]
    fn test_first_source_need_not_be_clonable() {
        let triples = cartesian_product3(Unclonable(vec![1, 2]), vec!['a'], vec![0u8, 1]);
        assert_eq!(
            collect(triples),
            vec![(1, 'a', 0), (1, 'a', 1), (2, 'a', 0), (2, 'a', 1)]
        );
    }

    #[test]
    fn test_nine_sources_count() {
        let bits = vec![0u8, 1];
        let product = cartesian_product9(
            bits.clone(),
            bits.clone(),
            bits.clone(),
            bits.clone(),
            bits.clone(),
            bits.clone(),
            bits.clone(),
            bits.clone(),
            bits.clone(),
        );

        assert_eq!(product.elements().count(), 512);
        assert_eq!(
            product.elements().last(),
            Some((1, 1, 1, 1, 1, 1, 1, 1, 1))
        );
    }

    #[test]
    fn test_product_all_order() {
        let product = cartesian_product_all(vec![
            source(0..2),
            source(0..2),
            source(5..7),
        ])
        .unwrap();

        assert_eq!(
            collect(product),
            vec![
                vec![0, 0, 5],
                vec![0, 0, 6],
                vec![0, 1, 5],
                vec![0, 1, 6],
                vec![1, 0, 5],
                vec![1, 0, 6],
                vec![1, 1, 5],
                vec![1, 1, 6],
            ]
        );
    }

    #[test]
    fn test_product_all_of_two() {
        let product = cartesian_product_all(vec![vec!['a'], vec!['b', 'c']]).unwrap();
        assert_eq!(collect(product), vec![vec!['a', 'b'], vec!['a', 'c']]);
    }

    #[test]
    fn test_product_all_needs_two_sources() {
        assert!(matches!(
            cartesian_product_all(vec![vec![1]]),
            Err(SeqCombError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_infinite_first_source() {
        let product = take(cartesian_product(integers(0), vec!['a', 'b']), 5);
        assert_eq!(
            collect(product),
            vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b'), (2, 'a')]
        );
    }

    #[test]
    fn test_inner_source_restarted_per_outer_element() {
        let inner = Probe::new(vec![1, 2]);
        let product = cartesian_product(source(0..3), inner.clone());
        assert_eq!(inner.starts(), 0);

        assert_eq!(collect(product).len(), 6);
        assert_eq!(inner.starts(), 3);
    }
}
