use plv_store::StoreError;
use plv_types::ObjectId;
use thiserror::Error;

/// Failures while resolving a single object's state.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested object id does not exist.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// State composition failed for this object (malformed stored data).
    #[error("failed to retrieve state for {object_id}: {reason}")]
    Retrieval { object_id: String, reason: String },

    /// The store layer itself is unreachable or erroring. Never retried
    /// here; surfaced distinctly so the boundary can report
    /// service-unavailable rather than not-found.
    #[error("storage infrastructure failure: {0}")]
    Infrastructure(String),
}

impl From<StoreError> for ResolveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(message) => Self::Infrastructure(message),
            StoreError::Corrupted { object_id, reason } => Self::Retrieval { object_id, reason },
        }
    }
}

/// Structural failures of a batch call. Per-item failures never surface
/// here; they are collected into the batch outcome instead.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch of {count} ids exceeds the maximum of {max}")]
    Oversized { count: usize, max: usize },
}
