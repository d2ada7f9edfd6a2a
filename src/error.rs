//! The error type returned by every query against the master.
use thiserror::Error;

/// A failed query.
///
/// There is one kind of error: whatever went wrong (transport, decoding, a missing key,
/// a lookup that found nothing or a task without container information) is described
/// by the message, which names the endpoint, key or identifier involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        QueryError { message: message.into() }
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
