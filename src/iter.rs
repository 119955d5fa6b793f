//! Iterator adapter for cursors.
//!
//! [`SeqIter`] advances a cursor with [`Value::Nil`] feedback and yields each
//! element, so a sequence can be consumed with a `for` loop or any std
//! iterator adapter. The completion value stays available afterwards.
//!
//! ```rust
//! use sequences::prelude::*;
//!
//! let mut iter = Sequence::from_values([1, 2]).iter();
//! let values: Vec<_> = iter.by_ref().collect::<Result<_>>().unwrap();
//! assert_eq!(values, vec![Value::from(1), Value::from(2)]);
//! assert_eq!(iter.into_return(), Some(Value::Nil));
//! ```

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

/// Iterator over the elements of a cursor.
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so iterating does
/// not have to consume the wrapper and the return value can be read later.
/// After an error the iterator is exhausted.
pub struct SeqIter<C> {
    state: State<C>,
}

enum State<C> {
    Active(C),
    Complete(Value),
    Failed,
}

impl<C: Cursor> SeqIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            state: State::Active(cursor),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, State::Complete(_))
    }

    /// Consume the iterator and return the completion value, if it completed.
    pub fn into_return(self) -> Option<Value> {
        match self.state {
            State::Complete(ret) => Some(ret),
            _ => None,
        }
    }

    pub fn return_value(&self) -> Option<&Value> {
        match &self.state {
            State::Complete(ret) => Some(ret),
            _ => None,
        }
    }
}

impl<C: Cursor> Iterator for SeqIter<C> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let State::Active(cursor) = &mut self.state else {
            return None;
        };
        match cursor.advance(Value::Nil) {
            Ok(Step::Yielded(value)) => Some(Ok(value)),
            Ok(Step::Complete(ret)) => {
                self.state = State::Complete(ret);
                None
            }
            Err(err) => {
                self.state = State::Failed;
                Some(Err(err))
            }
        }
    }
}
