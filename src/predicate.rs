/// Single-method contract for element tests
///
/// Every `Fn(&T) -> bool` closure is a predicate. Cursors store predicates
/// through this trait so that a negated predicate ([`Not`]) can be named in a
/// cursor type.
pub trait Predicate<T: ?Sized> {
    fn test(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Predicate that holds exactly when the wrapped predicate does not
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    predicate: P,
}

impl<P> Not<P> {
    pub fn new(predicate: P) -> Self {
        Not { predicate }
    }
}

impl<T: ?Sized, P> Predicate<T> for Not<P>
where
    P: Predicate<T>,
{
    fn test(&self, item: &T) -> bool {
        !self.predicate.test(item)
    }
}

/// Convenience function to negate a predicate
pub fn not<P>(predicate: P) -> Not<P> {
    Not::new(predicate)
}
