use crate::cursors::Each;
use crate::sequence::Sequence;

/// Sequence combinator that runs a procedure on every element as it passes
/// through
///
/// The procedure fires once per element per traversal, at the moment the
/// element is pulled, and never for elements that are not pulled.
#[derive(Debug, Clone)]
pub struct OnEach<S, F> {
    source: S,
    procedure: F,
}

impl<S, F> OnEach<S, F> {
    pub fn new(source: S, procedure: F) -> Self {
        OnEach { source, procedure }
    }
}

impl<S, F> Sequence for OnEach<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) + Clone,
{
    type Item = S::Item;
    type Cursor = Each<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        Each::new(self.source.cursor(), self.procedure.clone())
    }
}

/// Run `procedure` on each element while passing it through unchanged
pub fn each<S, F>(source: S, procedure: F) -> OnEach<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) + Clone,
{
    OnEach::new(source, procedure)
}

/// Extension trait to add .each() method support for sequences
pub trait EachExt: Sequence + Sized {
    fn each<F>(self, procedure: F) -> OnEach<Self, F>
    where
        F: Fn(&Self::Item) + Clone,
    {
        OnEach::new(self, procedure)
    }
}

impl<S> EachExt for S where S: Sequence {}
