//! The iteration protocol.
//!
//! A [`Cursor`] is the single-pass, stateful half of a sequence: each call to
//! [`Cursor::advance`] resumes the producer with a feedback value and returns
//! either the next element or completion.
//!
//! ```rust
//! use sequences::prelude::*;
//!
//! let mut cursor = Sequence::from_values([1, 2]).cursor();
//! assert_eq!(cursor.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(1)));
//! assert_eq!(cursor.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(2)));
//! assert!(cursor.advance(Value::Nil).unwrap().is_complete());
//! ```

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{error::Result, step::Step, value::Value};

/// Advance-with-feedback cursor.
///
/// `feedback` becomes the result of the suspension point the producer is
/// parked at. On the first advance there is no such point, so the value is
/// ignored; [`Value::Nil`] means "no feedback".
pub trait Cursor {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>>;

    fn boxed(self) -> Box<dyn Cursor>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Share this cursor so several handles advance the same traversal.
    fn shared(self) -> SharedCursor
    where
        Self: Sized + 'static,
    {
        SharedCursor(Rc::new(RefCell::new(Box::new(self))))
    }
}

impl Cursor for Box<dyn Cursor> {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        (**self).advance(feedback)
    }
}

impl<C> Cursor for &'_ mut C
where
    C: Cursor + ?Sized,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        (**self).advance(feedback)
    }
}

impl<C> Cursor for Rc<RefCell<C>>
where
    C: Cursor + ?Sized,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        let mut c = RefCell::borrow_mut(self);
        c.advance(feedback)
    }
}

impl<C> Cursor for Option<C>
where
    C: Cursor,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        match self {
            Some(c) => c.advance(feedback),
            None => Ok(Step::Complete(Value::Nil)),
        }
    }
}

/// A cursor that several owners advance in turn, such as an existing
/// iterator handed to the engine.
#[derive(Clone)]
pub struct SharedCursor(Rc<RefCell<Box<dyn Cursor>>>);

impl SharedCursor {
    pub fn new<C>(cursor: C) -> Self
    where
        C: Cursor + 'static,
    {
        cursor.shared()
    }

    pub fn ptr_eq(&self, other: &SharedCursor) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Cursor for SharedCursor {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        self.0.advance(feedback)
    }
}

impl fmt::Debug for SharedCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedCursor(..)")
    }
}

/// Guard placed around every cursor a sequence hands out.
///
/// Drops the feedback of the first advance and keeps answering
/// `Complete(Nil)` once the inner cursor has completed, without touching it
/// again.
pub struct Fuse<C> {
    inner: C,
    started: bool,
    done: bool,
}

impl<C> Fuse<C> {
    pub fn new(inner: C) -> Self {
        Fuse {
            inner,
            started: false,
            done: false,
        }
    }
}

impl<C> Cursor for Fuse<C>
where
    C: Cursor,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        if self.done {
            return Ok(Step::Complete(Value::Nil));
        }
        let feedback = if self.started {
            feedback
        } else {
            self.started = true;
            Value::Nil
        };
        let step = self.inner.advance(feedback)?;
        if step.is_complete() {
            self.done = true;
        }
        Ok(step)
    }
}
