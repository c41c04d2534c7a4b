use crate::error::{Result, SeqCombError};

/// One-element buffer shared by cursors that must look ahead before they can
/// answer `has_next`
#[derive(Debug, Clone)]
pub(crate) enum Lookahead<T> {
    /// Nothing buffered yet, upstream not consulted
    Pending,
    /// An element was pulled and not yet handed out
    Ready(T),
    /// Upstream has nothing more to give
    Done,
}

impl<T> Lookahead<T> {
    pub(crate) fn new() -> Self {
        Lookahead::Pending
    }

    /// Run `pull` if nothing is buffered and report whether an element is ready
    pub(crate) fn fill(&mut self, pull: impl FnOnce() -> Option<T>) -> bool {
        if let Lookahead::Pending = self {
            *self = match pull() {
                Some(value) => Lookahead::Ready(value),
                None => Lookahead::Done,
            };
        }
        matches!(self, Lookahead::Ready(_))
    }

    /// Hand out the buffered element
    pub(crate) fn take(&mut self) -> Result<T> {
        match std::mem::replace(self, Lookahead::Pending) {
            Lookahead::Ready(value) => Ok(value),
            state => {
                *self = state;
                Err(SeqCombError::exhausted())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_pulls_once() {
        let mut calls = 0;
        let mut slot = Lookahead::new();

        assert!(slot.fill(|| {
            calls += 1;
            Some(7)
        }));
        assert!(slot.fill(|| {
            calls += 1;
            Some(8)
        }));
        assert_eq!(calls, 1);
        assert_eq!(slot.take().unwrap(), 7);
    }

    #[test]
    fn test_done_stays_done() {
        let mut slot: Lookahead<u8> = Lookahead::new();

        assert!(!slot.fill(|| None));
        assert!(matches!(slot, Lookahead::Done));
        assert!(!slot.fill(|| Some(1)));
        assert_eq!(slot.take(), Err(SeqCombError::Exhausted));
        assert!(matches!(slot, Lookahead::Done));
    }
}
