//! Functions for driving cursors to completion.
//!
//! The eager operators on [`Sequence`](crate::Sequence) are thin wrappers
//! around [`handle`]: each decides what feedback to send back after every
//! yielded element.

use tracing::debug;

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

/// Drive a cursor to completion, answering every yield with the responder.
///
/// `feedback` is sent with the first advance. Returns the cursor's
/// completion value.
///
/// ```rust
/// use sequences::prelude::*;
///
/// let mut seen = Vec::new();
/// let done = handle(Sequence::from_values([1, 2]).cursor(), Value::Nil, |v| {
///     seen.push(v);
///     Ok(Value::Nil)
/// })
/// .unwrap();
/// assert_eq!(seen, vec![Value::from(1), Value::from(2)]);
/// assert!(done.is_nil());
/// ```
pub fn handle<C, R>(mut cursor: C, mut feedback: Value, mut responder: R) -> Result<Value>
where
    C: Cursor,
    R: FnMut(Value) -> Result<Value>,
{
    let mut steps = 0usize;
    loop {
        let step = cursor
            .advance(feedback)
            .inspect_err(|err| debug!(steps, %err, "cursor failed"))?;
        match step {
            Step::Yielded(value) => {
                steps += 1;
                feedback = responder(value)
                    .inspect_err(|err| debug!(steps, %err, "responder failed"))?;
            }
            Step::Complete(done) => {
                debug!(steps, "cursor driven to completion");
                return Ok(done);
            }
        }
    }
}

/// Fold every element into an accumulator that is also the feedback.
pub(crate) fn reduce<C, F>(cursor: C, mut callback: F, seed: Value) -> Result<Value>
where
    C: Cursor,
    F: FnMut(Value, Value) -> Result<Value>,
{
    let mut acc = seed;
    handle(cursor, Value::Nil, |value| {
        acc = callback(std::mem::take(&mut acc), value)?;
        Ok(acc.clone())
    })?;
    Ok(acc)
}

/// Run `callback` on every element, feeding back what it returns.
pub(crate) fn for_each<C, F, T>(cursor: C, mut callback: F) -> Result<()>
where
    C: Cursor,
    F: FnMut(Value) -> Result<T>,
    T: Into<Value>,
{
    handle(cursor, Value::Nil, |value| callback(value).map(Into::into))?;
    Ok(())
}

/// Collect every element in order.
pub(crate) fn to_vec<C: Cursor>(cursor: C) -> Result<Vec<Value>> {
    let mut out = Vec::new();
    handle(cursor, Value::Nil, |value| {
        out.push(value);
        Ok(Value::Nil)
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        build::{from_fn, values},
        error::Error,
    };

    #[test]
    fn test_handle_returns_completion_value() {
        let mut n = 0;
        let cursor = from_fn(move |_| {
            n += 1;
            Ok(if n < 3 {
                Step::Yielded(Value::from(n))
            } else {
                Step::Complete(Value::from("end"))
            })
        });
        let done = handle(cursor, Value::Nil, |_| Ok(Value::Nil)).unwrap();
        assert_eq!(done, Value::from("end"));
    }

    #[test]
    fn test_handle_sends_responses_as_feedback() {
        let mut received = Vec::new();
        let mut n = 0;
        let cursor = from_fn(|feedback| {
            received.push(feedback);
            n += 1;
            Ok(if n <= 2 {
                Step::Yielded(Value::from(n))
            } else {
                Step::Complete(Value::Nil)
            })
        });
        handle(cursor, Value::from("first"), |v| {
            Ok(Value::from(v.as_int().unwrap_or(0) * 10))
        })
        .unwrap();
        assert_eq!(
            received,
            vec![Value::from("first"), Value::from(10), Value::from(20)]
        );
    }

    #[test]
    fn test_handle_propagates_responder_error() {
        let cursor = values([Value::from(1), Value::from(2)].into_iter());
        let mut calls = 0;
        let err = handle(cursor, Value::Nil, |_| {
            calls += 1;
            Err(Error::callback("stop"))
        })
        .unwrap_err();
        assert_eq!(calls, 1);
        assert_eq!(err.to_string(), "callback failed: stop");
    }

    #[test]
    fn test_reduce_feeds_accumulator() {
        let mut received = Vec::new();
        let mut n = 0;
        let cursor = from_fn(|feedback| {
            received.push(feedback);
            n += 1;
            Ok(if n <= 3 {
                Step::Yielded(Value::from(n))
            } else {
                Step::Complete(Value::Nil)
            })
        });
        let sum = reduce(
            cursor,
            |acc, v| Ok(Value::from(acc.as_int().unwrap_or(0) + v.as_int().unwrap_or(0))),
            Value::from(0),
        )
        .unwrap();
        assert_eq!(sum, Value::from(6));
        assert_eq!(
            received,
            vec![Value::Nil, Value::from(1), Value::from(3), Value::from(6)]
        );
    }

    #[test]
    fn test_to_vec_collects_in_order() {
        let cursor = values((1..=3i64).map(Value::from));
        assert_eq!(
            to_vec(cursor).unwrap(),
            vec![Value::from(1), Value::from(2), Value::from(3)]
        );
    }

    #[test]
    fn test_for_each_feeds_callback_result() {
        let mut received = Vec::new();
        let mut n = 0;
        let cursor = from_fn(|feedback| {
            received.push(feedback);
            n += 1;
            Ok(if n <= 2 {
                Step::Yielded(Value::from(n))
            } else {
                Step::Complete(Value::Nil)
            })
        });
        for_each(cursor, |v| Ok::<_, Error>(v.as_int().unwrap_or(0) + 100)).unwrap();
        assert_eq!(
            received,
            vec![Value::Nil, Value::from(101), Value::from(102)]
        );
    }
}
