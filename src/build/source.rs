use std::rc::Rc;

use crate::{cursor::Cursor, error::Result, step::Step, value::Value};

/// Cursor that completes immediately.
pub struct Empty;

pub fn empty() -> Empty {
    Empty
}

impl Cursor for Empty {
    fn advance(&mut self, _feedback: Value) -> Result<Step<Value, Value>> {
        Ok(Step::Complete(Value::Nil))
    }
}

/// Yields a single value, then completes.
pub struct Once(Option<Value>);

pub fn once(value: Value) -> Once {
    Once(Some(value))
}

impl Cursor for Once {
    fn advance(&mut self, _feedback: Value) -> Result<Step<Value, Value>> {
        Ok(match self.0.take() {
            Some(v) => Step::Yielded(v),
            None => Step::Complete(Value::Nil),
        })
    }
}

/// Walks the positions `[start, len)` of a list.
pub struct Indexed {
    items: Rc<[Value]>,
    position: usize,
}

pub fn indexed(items: Rc<[Value]>, start: usize) -> Indexed {
    Indexed {
        items,
        position: start,
    }
}

impl Cursor for Indexed {
    fn advance(&mut self, _feedback: Value) -> Result<Step<Value, Value>> {
        match self.items.get(self.position) {
            Some(v) => {
                self.position += 1;
                Ok(Step::Yielded(v.clone()))
            }
            None => Ok(Step::Complete(Value::Nil)),
        }
    }
}

/// Adapts a std iterator; feedback has nowhere to go and is dropped.
pub struct Values<I>(I);

pub fn values<I>(iter: I) -> Values<I>
where
    I: Iterator<Item = Value>,
{
    Values(iter)
}

impl<I> Cursor for Values<I>
where
    I: Iterator<Item = Value>,
{
    fn advance(&mut self, _feedback: Value) -> Result<Step<Value, Value>> {
        Ok(match self.0.next() {
            Some(v) => Step::Yielded(v),
            None => Step::Complete(Value::Nil),
        })
    }
}
