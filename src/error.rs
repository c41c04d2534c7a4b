use std::borrow::Cow;
use thiserror::Error;

/// Canonical result for sequence and cursor operations.
pub type Result<T> = std::result::Result<T, SeqCombError>;

/// Errors surfaced by combinators, cursors and [`Maybe`](crate::Maybe).
///
/// Construction-time problems (`InvalidArgument`) are reported before any
/// cursor exists. The other two variants are raised by the call that hit
/// them and leave the cursor or value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqCombError {
    /// A combinator was given a parameter it cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    /// `next` was called on a cursor with no remaining elements
    #[error("cursor exhausted: no more elements")]
    Exhausted,

    /// A value was requested from an empty `Maybe`
    #[error("no such element: value is absent")]
    NoSuchElement,
}

impl SeqCombError {
    pub(crate) fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "rejected combinator argument");
        SeqCombError::InvalidArgument(message)
    }

    pub(crate) fn exhausted() -> Self {
        tracing::debug!("next called on exhausted cursor");
        SeqCombError::Exhausted
    }
}
