//! Error types for the intelligence engine.

use thiserror::Error;

/// Errors surfaced by [`IntelEngine::analyze`](crate::IntelEngine::analyze).
///
/// Classification itself is total; only recording the alert can fail.
#[derive(Debug, Error)]
pub enum IntelError {
    #[error("unable to record alert: {0}")]
    Record(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<database::DatabaseError> for IntelError {
    fn from(err: database::DatabaseError) -> Self {
        IntelError::Record(Box::new(err))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, IntelError>;
