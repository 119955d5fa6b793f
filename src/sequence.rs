//! Restartable sequences and their combinators.
//!
//! A [`Sequence`] is a recipe for traversals: every call to
//! [`Sequence::open`] hands out an independent [`Cursor`]. Lazy operators
//! return new sequences that open their upstream only when they are opened
//! themselves, so nothing runs until a cursor is advanced. Eager operators
//! (`reduce`, `for_each`, `to_vec`, `index_of`) open a traversal and drive it
//! to completion.
//!
//! ```rust
//! use sequences::prelude::*;
//!
//! let squares = numbers(1, 1)
//!     .map(|v, _| Ok(Value::from(v.as_int().unwrap_or(0).pow(2))))
//!     .exclude(|v: &Value| v.as_int().is_some_and(|n| n % 2 == 0))
//!     .head(3);
//! assert_eq!(
//!     squares.to_vec().unwrap(),
//!     vec![Value::from(1), Value::from(9), Value::from(25)]
//! );
//! ```

use std::{fmt, iter, rc::Rc};

use tracing::debug;

use crate::{
    build::{empty, indexed, produce},
    compose,
    cursor::{Cursor, Fuse},
    error::Result,
    handler,
    iter::SeqIter,
    normalize::normalize,
    numbers::numbers,
    predicate::{IntoPredicate, Predicate},
    step::Step,
    value::Value,
};

type Opener = dyn Fn(&Value) -> Box<dyn Cursor>;

/// A restartable producer of elements.
///
/// Cloning is cheap and yields a handle to the same sequence
/// ([`Sequence::ptr_eq`] holds between clones).
#[derive(Clone)]
pub struct Sequence(Rc<Opener>);

impl Sequence {
    /// Build a sequence from a function returning a fresh cursor per seed.
    ///
    /// Cursors are wrapped in [`Fuse`], so the first feedback is dropped and
    /// completion is final.
    pub fn new<F, C>(open: F) -> Self
    where
        F: Fn(&Value) -> C + 'static,
        C: Cursor + 'static,
    {
        Sequence(Rc::new(move |seed: &Value| Fuse::new(open(seed)).boxed()))
    }

    /// A restartable sequence over the given values.
    pub fn from_values<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Rc<[Value]> = items.into_iter().map(Into::into).collect();
        Sequence::new(move |_| indexed(items.clone(), 0))
    }

    /// A restartable sequence over a cloneable collection.
    pub fn from_iterable<T>(source: T) -> Self
    where
        T: Clone + IntoIterator + 'static,
        T::Item: Into<Value> + 'static,
        T::IntoIter: 'static,
    {
        normalize(Value::iterable(source))
    }

    /// A sequence over an existing iterator. Only the first traversal sees
    /// any elements.
    pub fn from_iter_once<I>(iter: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value> + 'static,
        I::IntoIter: 'static,
    {
        normalize(Value::iter_once(iter))
    }

    /// A feedback-driven producer.
    ///
    /// `f` is first called with the seed the traversal was opened with, and
    /// from then on with the last yielded value, or the consumer's feedback
    /// when it is not nil.
    pub fn from_producer<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Step<Value, Value>> + 'static,
    {
        let f = Rc::new(f);
        Sequence::new(move |seed| produce(seed.clone(), Rc::clone(&f)))
    }

    pub fn empty() -> Self {
        Sequence::new(|_| empty())
    }

    /// Start a traversal with `seed` as its context.
    pub fn open(&self, seed: &Value) -> Box<dyn Cursor> {
        (self.0)(seed)
    }

    /// Start a traversal without a seed.
    pub fn cursor(&self) -> Box<dyn Cursor> {
        self.open(&Value::Nil)
    }

    /// Fix the seed: the result opens `self` with `seed` whatever it is
    /// opened with.
    pub fn bind(&self, seed: impl Into<Value>) -> Sequence {
        let inner = self.clone();
        let seed = seed.into();
        Sequence(Rc::new(move |_: &Value| inner.open(&seed)))
    }

    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Iterate a fresh traversal with std iterator machinery.
    pub fn iter(&self) -> SeqIter<Box<dyn Cursor>> {
        SeqIter::new(self.cursor())
    }

    pub fn iter_with(&self, seed: &Value) -> SeqIter<Box<dyn Cursor>> {
        SeqIter::new(self.open(seed))
    }

    // Lazy operators

    /// Transform each element. `f` receives the element and the feedback
    /// the consumer sent for the previous one; feedback continues upstream
    /// unchanged.
    pub fn map<F>(&self, f: F) -> Sequence
    where
        F: Fn(&Value, &Value) -> Result<Value> + 'static,
    {
        let upstream = self.clone();
        let f = Rc::new(f);
        Sequence::new(move |seed| compose::map(upstream.open(seed), Rc::clone(&f)))
    }

    /// Transform feedback on its way upstream. `f` receives the consumer's
    /// feedback and the element it answers.
    pub fn inverse_map<F>(&self, f: F) -> Sequence
    where
        F: Fn(&Value, &Value) -> Result<Value> + 'static,
    {
        let upstream = self.clone();
        let f = Rc::new(f);
        Sequence::new(move |seed| compose::inverse_map(upstream.open(seed), Rc::clone(&f)))
    }

    /// Keep the elements the predicate accepts.
    pub fn filter(&self, predicate: impl IntoPredicate) -> Sequence {
        let upstream = self.clone();
        let predicate = predicate.into_predicate();
        Sequence::new(move |seed| compose::filter(upstream.open(seed), predicate.clone()))
    }

    /// Drop the elements the predicate accepts.
    pub fn exclude(&self, predicate: impl IntoPredicate) -> Sequence {
        self.filter(predicate.into_predicate().not())
    }

    /// Yield elements until the predicate fires on one; that element ends
    /// the sequence as its completion value.
    pub fn until(&self, predicate: impl IntoPredicate) -> Sequence {
        let upstream = self.clone();
        let predicate = predicate.into_predicate();
        Sequence::new(move |seed| compose::until(upstream.open(seed), predicate.clone()))
    }

    pub fn as_long_as(&self, predicate: impl IntoPredicate) -> Sequence {
        self.until(predicate.into_predicate().not())
    }

    /// The first `n` elements. Upstream is never advanced past them.
    ///
    /// Completes with nil once `n` elements were yielded, not with the
    /// element after them; a shorter upstream passes its own completion
    /// value through.
    pub fn head(&self, n: usize) -> Sequence {
        let upstream = self.clone();
        Sequence::new(move |seed| compose::take(upstream.open(seed), n))
    }

    /// Everything after the first `n` elements.
    pub fn skip(&self, n: usize) -> Sequence {
        self.skip_while(Predicate::new(move |_, _, count| Ok(count <= n)))
    }

    /// Drop leading elements while the predicate holds. It receives the
    /// element and the running count, starting at one.
    pub fn skip_while(&self, predicate: impl IntoPredicate) -> Sequence {
        let upstream = self.clone();
        let predicate = predicate.into_predicate();
        Sequence::new(move |seed| compose::skip_while(upstream.open(seed), predicate.clone()))
    }

    /// Replay the sequence `times` times, or forever with `None`.
    ///
    /// Cycling an empty sequence forever never yields and never returns.
    pub fn cycle(&self, times: Option<usize>) -> Sequence {
        let upstream = self.clone();
        Sequence::new(move |seed| {
            let repeated = iter::repeat(upstream.clone());
            match times {
                Some(n) => compose::chain(seed.clone(), repeated.take(n)),
                None => compose::chain(seed.clone(), repeated),
            }
        })
    }

    /// This sequence followed by each of `others`, normalised.
    pub fn concat<I>(&self, others: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let sources: Vec<Sequence> = iter::once(self.clone())
            .chain(others.into_iter().map(|other| normalize(other)))
            .collect();
        Sequence::new(move |seed| compose::chain(seed.clone(), sources.clone().into_iter()))
    }

    /// Zip this sequence with `others` into list tuples, stopping with the
    /// shortest participant.
    pub fn combine<I>(&self, others: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let participants: Vec<Sequence> = iter::once(self.clone())
            .chain(others.into_iter().map(|other| normalize(other)))
            .collect();
        Sequence::new(move |seed| {
            compose::combine(participants.iter().map(|p| p.open(seed)).collect())
        })
    }

    /// Inline nested containers, `depth` levels deep. `None` and `Some(0)`
    /// flatten all the way down.
    pub fn flatten(&self, depth: Option<usize>) -> Sequence {
        let upstream = self.clone();
        let depth = depth.filter(|&d| d != 0);
        Sequence::new(move |seed| compose::flatten(seed.clone(), upstream.open(seed), depth))
    }

    // Eager operators

    /// Fold the elements. The running accumulator is also sent back as
    /// feedback after each element.
    pub fn reduce<F>(&self, f: F, init: impl Into<Value>) -> Result<Value>
    where
        F: FnMut(Value, Value) -> Result<Value>,
    {
        handler::reduce(self.cursor(), f, init.into())
    }

    pub fn reduce_with<F>(&self, seed: &Value, f: F, init: impl Into<Value>) -> Result<Value>
    where
        F: FnMut(Value, Value) -> Result<Value>,
    {
        handler::reduce(self.open(seed), f, init.into())
    }

    /// Call `f` on every element; what it returns is sent back as feedback.
    pub fn for_each<F, T>(&self, f: F) -> Result<()>
    where
        F: FnMut(Value) -> Result<T>,
        T: Into<Value>,
    {
        handler::for_each(self.cursor(), f)
    }

    pub fn for_each_with<F, T>(&self, seed: &Value, f: F) -> Result<()>
    where
        F: FnMut(Value) -> Result<T>,
        T: Into<Value>,
    {
        handler::for_each(self.open(seed), f)
    }

    pub fn to_vec(&self) -> Result<Vec<Value>> {
        handler::to_vec(self.cursor())
    }

    pub fn to_vec_with(&self, seed: &Value) -> Result<Vec<Value>> {
        handler::to_vec(self.open(seed))
    }

    /// Hand the sequence to each observer in turn, then return it.
    ///
    /// Observers see this very sequence; traversals they open are
    /// independent unless the sequence wraps a one-shot iterator.
    pub fn tee<I, F>(&self, observers: I) -> Result<Sequence>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&Sequence) -> Result<()>,
    {
        for observer in observers {
            observer(self).inspect_err(|err| debug!(%err, "tee observer failed"))?;
        }
        Ok(self.clone())
    }

    /// Position of the first element strictly equal to `value`, searching
    /// from position `from`; `-1` when there is none.
    pub fn index_of(&self, value: impl Into<Value>, from: Option<usize>) -> Result<i64> {
        let needle = value.into();
        let found = self
            .combine([numbers(0, 1)])
            .skip(from.unwrap_or(0))
            .filter(Predicate::new(move |pair, _, _| {
                Ok(pair
                    .as_list()
                    .and_then(<[Value]>::first)
                    .is_some_and(|v| v.strict_eq(&needle)))
            }))
            .head(1)
            .reduce(
                |_, pair| Ok(pair.as_list().and_then(|p| p.get(1)).cloned().unwrap_or_default()),
                Value::Int(-1),
            )?;
        Ok(found.as_int().unwrap_or(-1))
    }

    /// Open a traversal and give it to `f`.
    pub fn with_cursor<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Box<dyn Cursor>) -> R,
    {
        f(self.cursor())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({:p})", Rc::as_ptr(&self.0))
    }
}
