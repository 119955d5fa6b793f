//! Host values flowing through sequences.
//!
//! [`Value`] is deliberately dynamic: a sequence may produce integers, then a
//! nested list, then another sequence, and the normaliser decides how each
//! shape is traversed.

use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{
    build::values,
    cursor::{Cursor, SharedCursor},
    error::Result,
    sequence::Sequence,
    step::Step,
};

type FuncBody = dyn Fn(&[Value]) -> Result<Value>;

/// A host callable taking positional arguments.
#[derive(Clone)]
pub struct Func(Rc<FuncBody>);

impl Func {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Func(Rc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.0)(args)
    }

    pub fn ptr_eq(&self, other: &Func) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func(..)")
    }
}

/// Iteration capability: hands out a fresh traversal on every request.
pub trait Iterable {
    fn traverse(&self) -> Box<dyn Cursor>;
}

struct IterableValues<T>(T);

impl<T> Iterable for IterableValues<T>
where
    T: Clone + IntoIterator,
    T::Item: Into<Value> + 'static,
    T::IntoIter: 'static,
{
    fn traverse(&self) -> Box<dyn Cursor> {
        values(self.0.clone().into_iter().map(Into::into)).boxed()
    }
}

#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value; also "no feedback".
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    /// Finite indexable container.
    List(Rc<[Value]>),
    Record(Rc<BTreeMap<Rc<str>, Value>>),
    Func(Func),
    Seq(Sequence),
    /// An existing single-pass iterator.
    Iter(SharedCursor),
    Iterable(Rc<dyn Iterable>),
}

impl Value {
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn record<I, K>(fields: I) -> Value
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<Rc<str>>,
    {
        Value::Record(Rc::new(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn func<F>(f: F) -> Value
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Value::Func(Func::new(f))
    }

    /// Wrap a re-iterable collection; each traversal clones it afresh.
    pub fn iterable<T>(source: T) -> Value
    where
        T: Clone + IntoIterator + 'static,
        T::Item: Into<Value> + 'static,
        T::IntoIter: 'static,
    {
        Value::Iterable(Rc::new(IterableValues(source)))
    }

    /// Wrap an iterator that can only be traversed once.
    pub fn iter_once<I>(iter: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value> + 'static,
        I::IntoIter: 'static,
    {
        Value::Iter(SharedCursor::new(values(iter.into_iter().map(Into::into))))
    }

    /// The `{value, done}` record a producer callable may return.
    pub fn iteration_result(step: Step<Value, Value>) -> Value {
        let done = step.is_complete();
        Value::record([("value", step.into_value()), ("done", Value::Bool(done))])
    }

    /// Reads a record shaped like `{value, done}` back into a step.
    pub fn as_iteration_result(&self) -> Option<Step<Value, Value>> {
        let Value::Record(fields) = self else {
            return None;
        };
        let Some(Value::Bool(done)) = fields.get("done") else {
            return None;
        };
        let value = fields.get("value").cloned().unwrap_or_default();
        Some(if *done {
            Step::Complete(value)
        } else {
            Step::Yielded(value)
        })
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Whether flatten may descend into this value.
    ///
    /// Strings count once they have more than one character; a single
    /// character normalises to itself.
    pub fn is_container(&self) -> bool {
        match self {
            Value::List(_) | Value::Seq(_) | Value::Iter(_) | Value::Iterable(_) => true,
            Value::Str(s) => s.chars().nth(1).is_some(),
            _ => false,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0 && !x.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Sequence> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Identity comparison used for membership tests and `index_of`.
    ///
    /// Scalars compare by value (integers and floats numerically, NaN is never
    /// equal), strings by content, and every other variant by reference.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            (Value::Seq(a), Value::Seq(b)) => a.ptr_eq(b),
            (Value::Iter(a), Value::Iter(b)) => a.ptr_eq(b),
            (Value::Iterable(a), Value::Iterable(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => self.scalar_eq(other).unwrap_or(false),
        }
    }

    fn scalar_eq(&self, other: &Value) -> Option<bool> {
        Some(match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => return None,
        })
    }
}

/// Structural equality: lists and records compare element-wise, everything
/// else as [`Value::strict_eq`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => self.strict_eq(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Record(fields) => f.debug_map().entries(fields.iter()).finish(),
            Value::Func(func) => func.fmt(f),
            Value::Seq(seq) => seq.fmt(f),
            Value::Iter(cursor) => cursor.fmt(f),
            Value::Iterable(_) => f.write_str("Iterable(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_nested(f, item)?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, item)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: ")?;
                    write_nested(f, item)?;
                }
                f.write_str("}")
            }
            Value::Func(_) => f.write_str("<function>"),
            Value::Seq(_) => f.write_str("<sequence>"),
            Value::Iter(_) => f.write_str("<iterator>"),
            Value::Iterable(_) => f.write_str("<iterable>"),
        }
    }
}

// strings inside containers are quoted so `["1"]` and `[1]` stay distinct
fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Str(s) => write!(f, "{s:?}"),
        other => write!(f, "{other}"),
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items.into())
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Seq(seq)
    }
}

impl From<Func> for Value {
    fn from(func: Func) -> Self {
        Value::Func(func)
    }
}

impl From<SharedCursor> for Value {
    fn from(cursor: SharedCursor) -> Self {
        Value::Iter(cursor)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl<T> FromIterator<T> for Value
where
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::list(iter)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or_default(),
            Json::String(s) => Value::from(s),
            Json::Array(items) => Value::list(items),
            Json::Object(fields) => Value::record(fields.into_iter().map(|(k, v)| (k, v.into()))),
        }
    }
}
