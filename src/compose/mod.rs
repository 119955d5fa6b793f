//! Lazy operators
//!
//! One cursor per operator. Each wraps the cursor(s) it was opened over and
//! only advances them when it is itself advanced; [`Sequence`](crate::Sequence)
//! wires them into restartable sequences.

mod chain;
mod combine;
mod filter;
mod flatten;
mod map;
mod skip;
mod take;
mod until;

pub use chain::{chain, Chain};
pub use combine::{combine, Combine};
pub use filter::{filter, Filter};
pub use flatten::{flatten, Flatten};
pub use map::{inverse_map, map, InverseMap, Map};
pub use skip::{skip_while, Skip};
pub use take::{take, Take};
pub use until::{until, Until};
