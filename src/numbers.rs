//! The numeric generator.

use crate::{build::from_fn, sequence::Sequence, step::Step, value::Value};

/// Counts up from `start` in increments of `step`, forever.
///
/// A zero `step` counts by one. The seed a traversal is opened with takes
/// precedence over the construction arguments: a non-zero `Int` replaces the
/// start, a `List` of `[start, step]` replaces whichever of the two is
/// non-zero. Other seeds, floats included, leave the construction arguments
/// in place since the generator only counts in integers. The sequence
/// completes instead of wrapping when the next number would overflow `i64`.
///
/// ```rust
/// use sequences::prelude::*;
///
/// let evens = numbers(0, 2).head(4).to_vec().unwrap();
/// assert_eq!(evens, vec![Value::from(0), Value::from(2), Value::from(4), Value::from(6)]);
///
/// let from_ten = numbers(0, 1).bind(10).head(2).to_vec().unwrap();
/// assert_eq!(from_ten, vec![Value::from(10), Value::from(11)]);
/// ```
pub fn numbers(start: i64, step: i64) -> Sequence {
    Sequence::new(move |seed: &Value| {
        let (start, step) = resolve(seed, start, step);
        let mut next = Some(start);
        from_fn(move |_| {
            Ok(match next {
                Some(n) => {
                    next = n.checked_add(step);
                    Step::Yielded(Value::Int(n))
                }
                None => Step::Complete(Value::Nil),
            })
        })
    })
}

fn resolve(seed: &Value, start: i64, step: i64) -> (i64, i64) {
    let (seed_start, seed_step) = match seed {
        Value::Int(n) => (*n, 0),
        Value::List(items) => (
            items.first().and_then(Value::as_int).unwrap_or(0),
            items.get(1).and_then(Value::as_int).unwrap_or(0),
        ),
        _ => (0, 0),
    };
    let start = if seed_start != 0 { seed_start } else { start };
    let step = match (seed_step, step) {
        (0, 0) => 1,
        (0, s) | (s, _) => s,
    };
    (start, step)
}
