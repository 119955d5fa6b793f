//! # Sequences: restartable lazy sequences with feedback
//!
//! A [`Sequence`] is a recipe that can be invoked any number of times; each
//! invocation hands out a [`Cursor`], a single-pass traversal advanced with a
//! feedback value that the producer receives at its suspension point.
//!
//! ## Core Types
//!
//! - **[`Sequence`]**: restartable producer carrying every combinator
//! - **[`Cursor`]**: advance-with-feedback traversal returning a [`Step`]
//! - **[`Value`]**: the dynamic values flowing through sequences
//! - **[`Predicate`]**: normalised element test used by `filter`, `until` and `skip_while`
//!
//! ## Example
//!
//! ```
//! use sequences::prelude::*;
//!
//! let words = Sequence::from_values(["a", "b"]).concat([Value::list(["c", "d"])]);
//! let numbered = words.combine([numbers(1, 1)]).skip(1).head(2);
//!
//! assert_eq!(
//!     numbered.to_vec().unwrap(),
//!     vec![Value::list([Value::from("b"), Value::from(2)]), Value::list([Value::from("c"), Value::from(3)])]
//! );
//! assert_eq!(words.index_of("d", None).unwrap(), 3);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`normalize(value)`](normalize) - Turn any value into a sequence
//! - [`numbers(start, step)`](numbers) - Count forever
//! - [`Sequence::from_producer`] - Feedback-driven producer
//!
//! **Execution:**
//! - [`handle(cursor, feedback, responder)`](handle) - Drive a cursor, answering each yield
//! - [`Sequence::iter`] - Consume with std iterator adapters

pub mod build;
pub mod compose;
mod cursor;
mod error;
mod handler;
mod iter;
mod normalize;
mod numbers;
mod predicate;
pub mod prelude;
mod sequence;
mod step;
mod value;

pub use cursor::*;
pub use error::*;
pub use handler::handle;
pub use iter::*;
pub use normalize::*;
pub use numbers::*;
pub use predicate::*;
pub use sequence::*;
pub use step::*;
pub use value::*;
