//! # SeqComb - Lazy Sequence Combinators
//!
//! A library of composable, lazy sequence combinators and an optional-value
//! type.
//!
//! A [`Sequence`] describes a stream of elements; calling
//! [`cursor`](Sequence::cursor) starts an independent traversal. Combinators
//! such as [`map`], [`filter`], [`zip`], [`batch`] and [`cycle`] wrap
//! sequences in new sequences without reading a single element, and the
//! resulting [`Cursor`] pulls from its sources one element at a time. The
//! library emphasizes:
//!
//! - **Laziness**: Nothing is computed until a cursor is driven, so infinite
//!   sources like [`integers`] compose freely
//! - **Early validation**: Bad arguments such as a zero batch size are
//!   rejected when the combinator is built, never mid-iteration
//! - **Composability**: Every combinator is a sequence, available both as a
//!   free function and as a method through the `*Ext` traits
//! - **Re-iterability**: Iterating a combinator twice replays its sources
//!   from the start
//!
//! [`Maybe`] models a present or absent value with explicit fallbacks.

pub mod batch;
pub mod cartesian_product;
pub mod chain;
pub mod cursor;
pub mod cursors;
pub mod cycle;
pub mod drop;
pub mod each;
pub mod enumerate;
pub mod equate;
pub mod error;
pub mod filter;
pub mod map;
pub mod maybe;
pub mod predicate;
pub mod prelude;
pub mod sequence;
pub mod slice;
pub mod source;
pub mod take;
pub mod zip;

#[cfg(test)]
mod probe;

pub use batch::{BatchExt, Batches, batch};
pub use cartesian_product::{
    CartesianProduct, CartesianProductAll, cartesian_product, cartesian_product_all,
    cartesian_product3, cartesian_product4, cartesian_product5, cartesian_product6,
    cartesian_product7, cartesian_product8, cartesian_product9,
};
pub use chain::{Chain, ChainExt, Concat, chain, concat};
pub use cursor::{Cursor, Elements};
pub use cycle::{Cycle, CycleExt, cycle, repeat};
pub use drop::{DropExt, DropWhile, drop, drop_until, drop_while};
pub use each::{EachExt, OnEach, each};
pub use enumerate::{EnumerateExt, enumerate, index};
pub use equate::equate;
pub use error::{Result, SeqCombError};
pub use filter::{Filter, FilterExt, filter, partition, reject};
pub use map::{Map, MapExt, map};
pub use maybe::Maybe;
pub use predicate::{Not, Predicate, not};
pub use sequence::Sequence;
pub use slice::{Slice, SliceExt, rest, slice};
pub use source::{Integers, SinglePass, Source, integers, single_pass, source};
pub use take::{TakeExt, TakeWhile, take, take_until, take_while};
pub use zip::{Zip, ZipExt, ZipSequences, zip, zip_all, zip3, zip4, zip5, zip6, zip7, zip8, zip9};
