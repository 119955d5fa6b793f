use tracing::trace;

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

/// Yields at most `limit` elements.
///
/// The count is checked before upstream is advanced, so once the limit is
/// reached nothing more is pulled. Completes with nil at the limit, or with
/// upstream's completion value if it runs out first.
pub struct Take {
    upstream: Box<dyn Cursor>,
    remaining: usize,
}

pub fn take(upstream: Box<dyn Cursor>, limit: usize) -> Take {
    Take {
        upstream,
        remaining: limit,
    }
}

impl Cursor for Take {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        if self.remaining == 0 {
            trace!("take limit reached");
            return Ok(Step::Complete(Value::Nil));
        }
        let step = self.upstream.advance(feedback)?;
        if step.is_yielded() {
            self.remaining -= 1;
        }
        Ok(step)
    }
}
