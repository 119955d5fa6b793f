use tracing::trace;

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

/// Zips participants positionally, shortest wins.
///
/// Every round advances each participant once, in order, and yields the
/// list of their elements. The first round in which any participant is
/// exhausted completes with that round's list instead, holding completion
/// values in the exhausted positions.
pub struct Combine {
    participants: Vec<Box<dyn Cursor>>,
}

pub fn combine(participants: Vec<Box<dyn Cursor>>) -> Combine {
    Combine { participants }
}

impl Cursor for Combine {
    fn advance(&mut self, _feedback: Value) -> Result<Step<Value, Value>> {
        let mut round = Vec::with_capacity(self.participants.len());
        let mut exhausted = false;
        for participant in &mut self.participants {
            match participant.advance(Value::Nil)? {
                Step::Yielded(v) => round.push(v),
                Step::Complete(d) => {
                    exhausted = true;
                    round.push(d);
                }
            }
        }
        if exhausted {
            trace!(participants = round.len(), "combine participant exhausted");
            return Ok(Step::Complete(Value::from(round)));
        }
        Ok(Step::Yielded(Value::from(round)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::values;

    #[test]
    fn test_combine_stops_with_shortest() {
        let a = values((1..=2).map(Value::from)).boxed();
        let b = values(["x", "y", "z"].into_iter().map(Value::from)).boxed();
        let mut c = combine(vec![a, b]);

        assert_eq!(
            c.advance(Value::Nil).unwrap(),
            Step::Yielded(Value::list([Value::from(1), Value::from("x")]))
        );
        assert_eq!(
            c.advance(Value::Nil).unwrap(),
            Step::Yielded(Value::list([Value::from(2), Value::from("y")]))
        );
        assert_eq!(
            c.advance(Value::Nil).unwrap(),
            Step::Complete(Value::list([Value::Nil, Value::from("z")]))
        );
    }

    #[test]
    fn test_combine_of_nothing_yields_empty_tuples() {
        let mut c = combine(Vec::new());
        assert_eq!(
            c.advance(Value::Nil).unwrap(),
            Step::Yielded(Value::list(Vec::<Value>::new()))
        );
    }
}
