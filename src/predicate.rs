//! Predicate normalisation.
//!
//! Operators such as `filter` and `until` accept anything that can act as a
//! membership test: a Rust closure, a host callable, or a pool of values
//! (a list, a sequence, any normalisable value) to look the probe up in.

use std::{fmt, rc::Rc};

use crate::{error::Result, normalize::normalize, sequence::Sequence, value::Value};

type Test = dyn Fn(&Value, &Value, usize) -> Result<bool>;

/// A test over `(element, context, position)`.
///
/// What `context` and `position` carry depends on the operator: `until`
/// passes the current feedback and a zero-based position, `skip_while` the
/// running count twice, `filter` nil and a zero-based position.
#[derive(Clone)]
pub struct Predicate(Rc<Test>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Value, usize) -> Result<bool> + 'static,
    {
        Predicate(Rc::new(f))
    }

    pub fn test(&self, value: &Value, context: &Value, position: usize) -> Result<bool> {
        (self.0)(value, context, position)
    }

    pub fn not(&self) -> Predicate {
        let inner = self.clone();
        Predicate::new(move |v, ctx, position| Ok(!inner.test(v, ctx, position)?))
    }

    /// Membership in `pool`, compared with [`Value::strict_eq`].
    ///
    /// The lookup stops at the first match, so an infinite pool works as
    /// long as the probe is in it; otherwise the lookup never returns.
    pub fn member_of(pool: Sequence) -> Predicate {
        Predicate::new(move |probe, _, _| {
            let probe = probe.clone();
            let found = pool
                .filter(Predicate::new(move |x, _, _| Ok(x.strict_eq(&probe))))
                .head(1)
                .reduce(|_, _| Ok(Value::Bool(true)), Value::Bool(false))?;
            Ok(found.is_truthy())
        })
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Turn a host value into a predicate.
///
/// Callables are used as is: they receive `[element, context, position]` and
/// their result is read for truthiness. Any other value becomes a pool.
pub fn to_predicate(value: Value) -> Predicate {
    match value {
        Value::Func(f) => Predicate::new(move |v, ctx, position| {
            let args = [v.clone(), ctx.clone(), Value::from(position)];
            Ok(f.call(&args)?.is_truthy())
        }),
        other => Predicate::member_of(normalize(other)),
    }
}

/// Anything accepted where an operator expects a predicate.
pub trait IntoPredicate {
    fn into_predicate(self) -> Predicate;
}

impl IntoPredicate for Predicate {
    fn into_predicate(self) -> Predicate {
        self
    }
}

impl IntoPredicate for Value {
    fn into_predicate(self) -> Predicate {
        to_predicate(self)
    }
}

impl IntoPredicate for Sequence {
    fn into_predicate(self) -> Predicate {
        Predicate::member_of(self)
    }
}

impl IntoPredicate for Vec<Value> {
    fn into_predicate(self) -> Predicate {
        Predicate::member_of(normalize(self))
    }
}

impl<F> IntoPredicate for F
where
    F: Fn(&Value) -> bool + 'static,
{
    fn into_predicate(self) -> Predicate {
        Predicate::new(move |v, _, _| Ok(self(v)))
    }
}
