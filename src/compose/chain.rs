use crate::{cursor::Cursor, error::Result, sequence::Sequence, step::Step, value::Value};

/// Traverses sequences end to end, one after another.
///
/// Each sequence is opened with the shared seed only once the previous one
/// has completed; the last one opened is dropped as soon as it completes.
/// Feedback goes to whichever traversal is active.
pub struct Chain {
    seed: Value,
    pending: Box<dyn Iterator<Item = Sequence>>,
    active: Option<Box<dyn Cursor>>,
}

pub fn chain<I>(seed: Value, sources: I) -> Chain
where
    I: Iterator<Item = Sequence> + 'static,
{
    Chain {
        seed,
        pending: Box::new(sources),
        active: None,
    }
}

impl Cursor for Chain {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        loop {
            let active = match self.active {
                Some(ref mut c) => c,
                None => match self.pending.next() {
                    Some(next) => self.active.insert(next.open(&self.seed)),
                    None => return Ok(Step::Complete(Value::Nil)),
                },
            };
            match active.advance(feedback.clone())? {
                Step::Yielded(v) => return Ok(Step::Yielded(v)),
                Step::Complete(_) => self.active = None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_runs_sources_in_order() {
        let a = Sequence::from_values([1, 2]);
        let b = Sequence::from_values([3]);
        let mut c = chain(Value::Nil, vec![a, b].into_iter());

        assert_eq!(c.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(1)));
        assert_eq!(c.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(2)));
        assert_eq!(c.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(3)));
        assert!(c.advance(Value::Nil).unwrap().is_complete());
    }

    #[test]
    fn test_chain_skips_empty_sources() {
        let mut c = chain(
            Value::Nil,
            vec![Sequence::empty(), Sequence::from_values([9]), Sequence::empty()].into_iter(),
        );

        assert_eq!(c.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(9)));
        assert!(c.advance(Value::Nil).unwrap().is_complete());
    }

    #[test]
    fn test_chain_without_sources_is_empty() {
        let mut c = chain(Value::Nil, std::iter::empty());
        assert!(c.advance(Value::Nil).unwrap().is_complete());
    }
}
