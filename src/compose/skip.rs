use crate::{cursor::Cursor, error::Result, predicate::Predicate, step::Step, value::Value};

/// Discards leading elements while the predicate holds.
///
/// The predicate receives `(element, count, count)` where `count` is the
/// running number of elements seen, starting at one. The first element that
/// fails it is yielded and everything after passes through untouched,
/// feedback included.
pub struct Skip {
    upstream: Box<dyn Cursor>,
    predicate: Predicate,
    count: usize,
    skipping: bool,
}

pub fn skip_while(upstream: Box<dyn Cursor>, predicate: Predicate) -> Skip {
    Skip {
        upstream,
        predicate,
        count: 0,
        skipping: true,
    }
}

impl Cursor for Skip {
    fn advance(&mut self, feedback: Value) -> Result<Step<Value, Value>> {
        if !self.skipping {
            return self.upstream.advance(feedback);
        }
        loop {
            match self.upstream.advance(Value::Nil)? {
                Step::Complete(d) => return Ok(Step::Complete(d)),
                Step::Yielded(v) => {
                    self.count += 1;
                    let count = Value::from(self.count);
                    if !self.predicate.test(&v, &count, self.count)? {
                        self.skipping = false;
                        return Ok(Step::Yielded(v));
                    }
                }
            }
        }
    }
}
