//! Commonly used imports
//!
//! Use `use sequences::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, Error, Func, Result, Sequence, Step, Value};

// Sources
pub use crate::{normalize, normalize_from, numbers};
pub use crate::build::{from_fn, once};

// Predicates
pub use crate::{to_predicate, IntoPredicate, Predicate};

// Execution
pub use crate::{handle, SeqIter};
