//! Element-wise transforms in both directions of the data flow.
//!
//! [`Map`] rewrites what travels downstream; [`InverseMap`] rewrites the
//! feedback travelling upstream.

use std::rc::Rc;

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

/// Transforms every produced element.
///
/// The transform receives `(element, feedback)`, where `feedback` is the value
/// the consumer sent with the advance that produced the element. The same
/// feedback is forwarded upstream unchanged.
pub struct Map<F> {
    upstream: Box<dyn Cursor>,
    f: Rc<F>,
}

pub fn map<F>(upstream: Box<dyn Cursor>, f: Rc<F>) -> Map<F>
where
    F: Fn(&Value, &Value) -> Result<Value>,
{
    Map { upstream, f }
}

impl<F> Cursor for Map<F>
where
    F: Fn(&Value, &Value) -> Result<Value>,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        self.upstream
            .advance(feedback.clone())?
            .try_map_yielded(|v| (self.f)(&v, &feedback))
    }
}

/// Transforms the feedback instead of the elements.
///
/// Elements pass through untouched. When the consumer resumes with feedback
/// `r`, the transform is called with `(r, last element)` and its result is
/// what the upstream producer receives.
pub struct InverseMap<F> {
    upstream: Box<dyn Cursor>,
    f: Rc<F>,
    last: Option<Value>,
}

pub fn inverse_map<F>(upstream: Box<dyn Cursor>, f: Rc<F>) -> InverseMap<F>
where
    F: Fn(&Value, &Value) -> Result<Value>,
{
    InverseMap {
        upstream,
        f,
        last: None,
    }
}

impl<F> Cursor for InverseMap<F>
where
    F: Fn(&Value, &Value) -> Result<Value>,
{
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        let upstream_feedback = match self.last.take() {
            Some(last) => (self.f)(&feedback, &last)?,
            None => Value::Nil,
        };
        let step = self.upstream.advance(upstream_feedback)?;
        Ok(step.map_yielded(|v| {
            self.last = Some(v.clone());
            v
        }))
    }
}
