//! Cursor primitives
//!
//! Each primitive is a small state machine that owns the cursor(s) it reads
//! from and pulls from them only when it is itself pulled.

pub mod batched;
pub mod chained;
pub mod cyclic;
pub mod each;
pub mod filtered;
mod lookahead;
pub mod mapped;
pub mod predicated;
pub mod product;
pub mod source;
pub mod sub_sequence;
pub mod zipped;

pub use batched::{Batch, Batched};
pub use chained::{Chained, Flattened};
pub use cyclic::Cyclic;
pub use each::Each;
pub use filtered::Filtered;
pub use mapped::Mapped;
pub use predicated::{Dropping, Predicated};
pub use product::Product;
pub use source::IterCursor;
pub use sub_sequence::SubSequence;
pub use zipped::{ZipCursors, Zipped};
