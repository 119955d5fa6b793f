use std::rc::Rc;

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

pub struct FromFn<F>(F);

impl<F> Cursor for FromFn<F>
where
    F: FnMut(Value) -> Result<Step<Value, Value>>,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        (self.0)(feedback)
    }
}

/// Create a cursor from a closure receiving each feedback value.
///
/// ```rust
/// use sequences::prelude::*;
///
/// let mut n = 0;
/// let mut countdown = from_fn(move |_| {
///     n += 1;
///     Ok(if n <= 2 { Step::Yielded(Value::from(n)) } else { Step::Complete(Value::Nil) })
/// });
/// assert_eq!(countdown.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(1)));
/// assert_eq!(countdown.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(2)));
/// assert!(countdown.advance(Value::Nil).unwrap().is_complete());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(Value) -> Result<Step<Value, Value>>,
{
    FromFn(f)
}

/// Feedback-driven producer.
///
/// Each advance calls the producer with the current state. A yielded value
/// becomes the next state unless the consumer sends non-nil feedback, which
/// replaces it.
pub struct Produce<F> {
    f: Rc<F>,
    state: Value,
    started: bool,
}

/// Create a producer whose first call receives `state`.
pub fn produce<F>(state: Value, f: Rc<F>) -> Produce<F>
where
    F: Fn(&Value) -> Result<Step<Value, Value>>,
{
    Produce {
        f,
        state,
        started: false,
    }
}

impl<F> Cursor for Produce<F>
where
    F: Fn(&Value) -> Result<Step<Value, Value>>,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        if self.started && !feedback.is_nil() {
            self.state = feedback;
        }
        self.started = true;
        let step = (self.f)(&self.state)?;
        if let Step::Yielded(v) = &step {
            self.state = v.clone();
        }
        Ok(step)
    }
}
