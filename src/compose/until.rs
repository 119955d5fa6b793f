use tracing::trace;

use crate::{cursor::Cursor, error::Result, predicate::Predicate, step::Step, value::Value};

/// Passes elements through until the predicate fires.
///
/// The predicate is called with `(element, feedback, position)`, where
/// `position` counts the elements seen so far starting at zero. The element
/// that fires it is not yielded; it becomes the completion value instead.
pub struct Until {
    upstream: Box<dyn Cursor>,
    predicate: Predicate,
    position: usize,
}

pub fn until(upstream: Box<dyn Cursor>, predicate: Predicate) -> Until {
    Until {
        upstream,
        predicate,
        position: 0,
    }
}

impl Cursor for Until {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        match self.upstream.advance(feedback.clone())? {
            Step::Complete(d) => Ok(Step::Complete(d)),
            Step::Yielded(v) => {
                if self.predicate.test(&v, &feedback, self.position)? {
                    trace!(position = self.position, "until predicate fired");
                    return Ok(Step::Complete(v));
                }
                self.position += 1;
                Ok(Step::Yielded(v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::values;

    fn ints(items: &[i64]) -> Box<dyn Cursor> {
        values(items.to_vec().into_iter().map(Value::from)).boxed()
    }

    #[test]
    fn test_until_stops_at_first_match() {
        let big = Predicate::new(|v, _, _| Ok(v.as_int().unwrap_or(0) > 2));
        let mut u = until(ints(&[1, 2, 3, 4]), big);

        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(1)));
        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(2)));
        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Complete(Value::from(3)));
    }

    #[test]
    fn test_until_passes_position() {
        let third = Predicate::new(|_, _, position| Ok(position == 2));
        let mut u = until(ints(&[7, 8, 9, 10]), third);

        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(7)));
        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(8)));
        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Complete(Value::from(9)));
    }

    #[test]
    fn test_until_upstream_exhausted() {
        let never = Predicate::new(|_, _, _| Ok(false));
        let mut u = until(ints(&[1]), never);

        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(1)));
        assert_eq!(u.advance(Value::Nil).unwrap(), Step::Complete(Value::Nil));
    }
}
