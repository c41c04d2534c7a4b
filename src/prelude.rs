//! Traits and types needed to build pipelines with method syntax
//!
//! ```
//! use seqcomb::prelude::*;
//! use seqcomb::{integers, source};
//!
//! let squares = integers(1).map(|n| n * n).take_while(|n: &usize| *n < 30);
//! assert_eq!(squares.elements().collect::<Vec<_>>(), vec![1, 4, 9, 16, 25]);
//!
//! let words = source(vec!["a", "bb", "ccc"]).reject(|w: &&str| w.len() == 2);
//! assert_eq!(words.elements().collect::<Vec<_>>(), vec!["a", "ccc"]);
//! ```

pub use crate::batch::BatchExt;
pub use crate::chain::ChainExt;
pub use crate::cursor::Cursor;
pub use crate::cycle::CycleExt;
pub use crate::drop::DropExt;
pub use crate::each::EachExt;
pub use crate::enumerate::EnumerateExt;
pub use crate::filter::FilterExt;
pub use crate::map::MapExt;
pub use crate::maybe::Maybe;
pub use crate::sequence::Sequence;
pub use crate::slice::SliceExt;
pub use crate::take::TakeExt;
pub use crate::zip::ZipExt;
