use crate::cursor::Cursor;
use crate::error::{Result, SeqCombError};

/// A group of cursors advanced in lockstep by [`Zipped`]
///
/// Implemented for `Vec<C>` (homogeneous, any width) and for tuples of two
/// to nine cursors (heterogeneous).
pub trait ZipCursors {
    type Item;

    /// Whether every cursor in the group can produce another element
    fn all_have_next(&mut self) -> bool;

    /// Pull exactly one element from each cursor, in order
    fn pull(&mut self) -> Result<Self::Item>;
}

impl<C: Cursor> ZipCursors for Vec<C> {
    type Item = Vec<C::Item>;

    fn all_have_next(&mut self) -> bool {
        !self.is_empty() && self.iter_mut().all(|cursor| cursor.has_next())
    }

    fn pull(&mut self) -> Result<Self::Item> {
        self.iter_mut().map(|cursor| cursor.next()).collect()
    }
}

macro_rules! zip_cursors_tuple {
    ($($cursor:ident $var:ident),+) => {
        impl<$($cursor: Cursor),+> ZipCursors for ($($cursor,)+) {
            type Item = ($($cursor::Item,)+);

            fn all_have_next(&mut self) -> bool {
                let ($($var,)+) = self;
                true $(&& $var.has_next())+
            }

            fn pull(&mut self) -> Result<Self::Item> {
                let ($($var,)+) = self;
                Ok(($($var.next()?,)+))
            }
        }
    };
}

zip_cursors_tuple!(A a, B b);
zip_cursors_tuple!(A a, B b, C c);
zip_cursors_tuple!(A a, B b, C c, D d);
zip_cursors_tuple!(A a, B b, C c, D d, E e);
zip_cursors_tuple!(A a, B b, C c, D d, E e, F f);
zip_cursors_tuple!(A a, B b, C c, D d, E e, F f, G g);
zip_cursors_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);
zip_cursors_tuple!(A a, B b, C c, D d, E e, F f, G g, H h, I i);

/// Cursor that combines one element from each of several cursors per pull
///
/// Every cursor is checked before any is pulled, so when one runs dry the
/// others are left exactly where the previous round stopped.
pub struct Zipped<Z> {
    cursors: Z,
    done: bool,
}

impl<Z> Zipped<Z> {
    pub fn new(cursors: Z) -> Self {
        Zipped {
            cursors,
            done: false,
        }
    }
}

impl<Z: ZipCursors> Cursor for Zipped<Z> {
    type Item = Z::Item;

    fn has_next(&mut self) -> bool {
        if !self.done && !self.cursors.all_have_next() {
            self.done = true;
        }
        !self.done
    }

    fn next(&mut self) -> Result<Self::Item> {
        if self.has_next() {
            self.cursors.pull()
        } else {
            Err(SeqCombError::exhausted())
        }
    }
}
