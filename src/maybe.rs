//! Optional values with explicit fallbacks
//!
//! [`Maybe`] is either `Some` value or `None`. It converts freely to and from
//! [`Option`] and adds the fallback vocabulary used across this crate: `or`,
//! `or_some`, `or_option` for alternatives, and the `get_or_*` family for
//! extracting a value. A present-but-empty value is expressed as
//! `Maybe<Option<T>>`, so `Maybe::Some(None)` is distinct from `Maybe::None`.

use crate::error::{Result, SeqCombError};

/// A value that may or may not be present
#[derive(Debug, Clone, Copy)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    /// A present value
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// An absent value
    pub fn none() -> Self {
        Maybe::None
    }

    /// `Some` when `value` holds something, `None` otherwise
    pub fn option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }

    pub fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub fn has_no_value(&self) -> bool {
        !self.has_value()
    }

    /// The contained value, or `NoSuchElement` when absent
    pub fn get(self) -> Result<T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(SeqCombError::NoSuchElement),
        }
    }

    /// `self` when present, `other` otherwise
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(_) => self,
            Maybe::None => other,
        }
    }

    /// `self` when present, `Some(value)` otherwise
    pub fn or_some(self, value: T) -> Maybe<T> {
        self.or(Maybe::Some(value))
    }

    /// `self` when present, otherwise `value` converted to a `Maybe`
    pub fn or_option(self, value: Option<T>) -> Maybe<T> {
        self.or(Maybe::option(value))
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// The contained value as a standard [`Option`]
    pub fn get_or_null(self) -> Option<T> {
        self.into()
    }

    /// The contained value, or the result of `supplier`
    ///
    /// `supplier` only runs when the value is absent.
    pub fn get_or_call<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => supplier(),
        }
    }

    /// The contained value, or the supplied error when absent
    pub fn get_or_throw<E>(self, error: E) -> std::result::Result<T, E> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(error),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(mapper(value)),
            Maybe::None => Maybe::None,
        }
    }

    pub fn and_then<U, F>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => binder(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().get_or_null().into_iter()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.get_or_null().into_iter()
    }
}

/// Values compare equal when both are absent, or both present with equal
/// payloads, even across payload types that compare with each other
impl<T, U> PartialEq<Maybe<U>> for Maybe<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Maybe<U>) -> bool {
        match (self, other) {
            (Maybe::Some(left), Maybe::Some(right)) => left == right,
            (Maybe::None, Maybe::None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}
