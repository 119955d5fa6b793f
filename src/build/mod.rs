//! Leaf cursors
//!
//! The producers every sequence bottoms out in: closures, feedback-driven
//! producers, single values, indexable containers and std iterators.

mod func;
mod source;

pub use func::{from_fn, produce, FromFn, Produce};
pub use source::{empty, indexed, once, values, Empty, Indexed, Once, Values};
