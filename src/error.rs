//! Failures raised by user callbacks.
//!
//! The engine itself never fails: every error originates in a callback handed
//! to an operator and travels back, unchanged, to whoever called `advance` or
//! the eager operator that ran the callback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A callback reported a failure with a message.
    #[error("callback failed: {0}")]
    Callback(String),
    /// A callback failed with an underlying error.
    #[error("callback failed")]
    Source(#[source] Box<dyn std::error::Error + 'static>),
}

impl Error {
    pub fn callback(message: impl Into<String>) -> Self {
        Error::Callback(message.into())
    }

    pub fn from_source<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Error::Source(Box::new(error))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
