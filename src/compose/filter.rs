use crate::{cursor::Cursor, error::Result, predicate::Predicate, step::Step, value::Value};

/// Yields the elements the predicate accepts.
///
/// The predicate is called with `(element, Nil, position)`. Feedback sent
/// after an accepted element is forwarded to the upstream advance that
/// follows it; rejected elements are skipped with no feedback.
pub struct Filter {
    upstream: Box<dyn Cursor>,
    predicate: Predicate,
    position: usize,
}

pub fn filter(upstream: Box<dyn Cursor>, predicate: Predicate) -> Filter {
    Filter {
        upstream,
        predicate,
        position: 0,
    }
}

impl Cursor for Filter {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        let mut feedback = feedback;
        loop {
            match self.upstream.advance(feedback)? {
                Step::Complete(d) => return Ok(Step::Complete(d)),
                Step::Yielded(v) => {
                    let position = self.position;
                    self.position += 1;
                    if self.predicate.test(&v, &Value::Nil, position)? {
                        return Ok(Step::Yielded(v));
                    }
                    feedback = Value::Nil;
                }
            }
        }
    }
}
