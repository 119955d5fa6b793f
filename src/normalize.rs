//! Source normalisation.
//!
//! Every operator that takes "something sequence-like" funnels it through
//! [`normalize`], which picks a traversal strategy from the shape of the
//! value:
//!
//! | shape | traversal |
//! |---|---|
//! | [`Value::Iter`] | the one existing iterator, shared by every open |
//! | [`Value::Iterable`] | a fresh traversal per open |
//! | [`Value::Func`] | feedback-driven producer, see [`Sequence::from_producer`] |
//! | [`Value::Seq`] | the sequence itself |
//! | [`Value::List`] | its positions, from the start index on |
//! | non-empty [`Value::Str`] | its characters, from the start index on |
//! | anything else | the value once |
//!
//! A one-character string therefore normalises to itself. Records are
//! scalars.

use std::{rc::Rc, slice};

use tracing::trace;

use crate::{
    build::{indexed, once},
    sequence::Sequence,
    step::Step,
    value::Value,
};

/// Normalise any value into a [`Sequence`].
///
/// Idempotent: normalising a sequence returns the very same sequence.
///
/// ```rust
/// use sequences::prelude::*;
///
/// let seq = normalize(Value::list([1, 2, 3]));
/// assert!(normalize(seq.clone()).ptr_eq(&seq));
/// assert_eq!(normalize("hi").to_vec().unwrap(), vec![Value::from("h"), Value::from("i")]);
/// ```
pub fn normalize(source: impl Into<Value>) -> Sequence {
    normalize_from(source, 0)
}

/// Like [`normalize`], starting lists and strings at position `start`.
pub fn normalize_from(source: impl Into<Value>, start: usize) -> Sequence {
    match source.into() {
        Value::Iter(shared) => {
            trace!(rule = "iterator", "normalized source");
            Sequence::new(move |_| shared.clone())
        }
        Value::Iterable(iterable) => {
            trace!(rule = "iterable", "normalized source");
            Sequence::new(move |_| iterable.traverse())
        }
        Value::Func(f) => {
            trace!(rule = "producer", "normalized source");
            Sequence::from_producer(move |state| {
                let out = f.call(slice::from_ref(state))?;
                Ok(match out.as_iteration_result() {
                    Some(step) => step,
                    None => Step::Yielded(out),
                })
            })
        }
        Value::Seq(seq) => seq,
        Value::List(items) => {
            trace!(rule = "indexed", len = items.len(), start, "normalized source");
            Sequence::new(move |_| indexed(items.clone(), start))
        }
        Value::Str(text) if !text.is_empty() => {
            let chars: Rc<[Value]> = text.chars().map(|c| Value::from(c.to_string())).collect();
            trace!(rule = "characters", len = chars.len(), start, "normalized source");
            Sequence::new(move |_| indexed(chars.clone(), start))
        }
        scalar => {
            trace!(rule = "scalar", "normalized source");
            Sequence::new(move |_| once(scalar.clone()))
        }
    }
}
