use thiserror::Error;

/// Failures surfaced by the storage layer.
///
/// Absence of a row is never an error — lookups return `Ok(None)` for
/// missing objects, coordinates, or snapshots. `Unavailable` marks an
/// infrastructure failure (the store itself is unreachable or erroring);
/// `Corrupted` marks malformed stored data for one object.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("corrupted record for {object_id}: {reason}")]
    Corrupted { object_id: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
