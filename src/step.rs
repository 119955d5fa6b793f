/// Result of advancing a cursor: either an element was produced and the
/// producer is suspended, or the producer is exhausted.
///
/// `Yielded(v)` corresponds to `{ value: v, done: false }` and `Complete(r)` to
/// `{ value: r, done: true }`. The completion value is distinct from the
/// elements of the sequence.
///
/// ```rust
/// use sequences::Step;
///
/// let produced: Step<i32, &str> = Step::Yielded(1);
/// assert_eq!(produced.map_yielded(|v| v + 1), Step::Yielded(2));
/// assert!(Step::<i32, &str>::Complete("end").is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, D> {
    /// An element was produced; the producer waits for the next advance.
    Yielded(Y),
    /// The producer is exhausted, optionally carrying a final value.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// `done` flag of the iteration result.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// [`Step::map_yielded`] with a fallible transform.
    #[inline]
    pub fn try_map_yielded<Y2, E, F>(self, f: F) -> Result<Step<Y2, D>, E>
    where
        F: FnOnce(Y) -> Result<Y2, E>,
    {
        Ok(match self {
            Step::Yielded(y) => Step::Yielded(f(y)?),
            Step::Complete(d) => Step::Complete(d),
        })
    }
}

impl<T> Step<T, T> {
    /// The `value` field of the iteration result, whichever side it is on.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Step::Yielded(v) | Step::Complete(v) => v,
        }
    }
}
