use crate::{cursor::Cursor, error::Result, normalize::normalize, step::Step, value::Value};

/// Depth-first flattening of nested containers.
///
/// Elements for which [`Value::is_container`] holds are normalised and
/// traversed in place while the depth budget allows; everything else is
/// yielded as is. A `None` budget never runs out. Self-containing values
/// recurse forever.
pub struct Flatten {
    seed: Value,
    stack: Vec<Frame>,
}

struct Frame {
    cursor: Box<dyn Cursor>,
    // levels still allowed below this frame
    budget: Option<usize>,
}

pub fn flatten(seed: Value, upstream: Box<dyn Cursor>, depth: Option<usize>) -> Flatten {
    Flatten {
        seed,
        stack: vec![Frame {
            cursor: upstream,
            budget: depth,
        }],
    }
}

impl Cursor for Flatten {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        let mut feedback = feedback;
        loop {
            let Some(top) = self.stack.last_mut() else {
                return Ok(Step::Complete(Value::Nil));
            };
            let budget = top.budget;
            match top.cursor.advance(feedback)? {
                Step::Complete(d) => {
                    self.stack.pop();
                    if self.stack.is_empty() {
                        return Ok(Step::Complete(d));
                    }
                }
                Step::Yielded(v) if v.is_container() && budget != Some(0) => {
                    let cursor = normalize(v).open(&self.seed);
                    self.stack.push(Frame {
                        cursor,
                        budget: budget.map(|b| b - 1),
                    });
                }
                Step::Yielded(v) => return Ok(Step::Yielded(v)),
            }
            feedback = Value::Nil;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::values, numbers::numbers};

    fn nested() -> Box<dyn Cursor> {
        let items = vec![
            Value::from(1),
            Value::list([Value::from(2), Value::list([Value::from(3)])]),
            Value::from(4),
        ];
        values(items.into_iter()).boxed()
    }

    fn drain(mut cursor: impl Cursor) -> Vec<Value> {
        let mut out = Vec::new();
        while let Step::Yielded(v) = cursor.advance(Value::Nil).unwrap() {
            out.push(v);
        }
        out
    }

    #[test]
    fn test_flatten_unlimited() {
        let out = drain(flatten(Value::Nil, nested(), None));
        assert_eq!(out, vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
    }

    #[test]
    fn test_flatten_one_level() {
        let out = drain(flatten(Value::Nil, nested(), Some(1)));
        assert_eq!(
            out,
            vec![
                Value::from(1),
                Value::from(2),
                Value::list([Value::from(3)]),
                Value::from(4)
            ]
        );
    }

    #[test]
    fn test_flatten_splits_strings_into_characters() {
        let items = vec![Value::from("ab"), Value::list([Value::from("cd")])];
        let out = drain(flatten(Value::Nil, values(items.into_iter()).boxed(), None));
        assert_eq!(
            out,
            vec![Value::from("a"), Value::from("b"), Value::from("c"), Value::from("d")]
        );
    }

    #[test]
    fn test_flatten_descends_into_sequences_and_iterators() {
        let items = vec![
            Value::from(numbers(0, 1).head(2)),
            Value::iterable(vec![7]),
            Value::iter_once(vec![8, 9]),
        ];
        // the seed reaches the nested sequence
        let out = drain(flatten(Value::from(5), values(items.into_iter()).boxed(), None));
        assert_eq!(
            out,
            vec![Value::from(5), Value::from(6), Value::from(7), Value::from(8), Value::from(9)]
        );
    }
}
