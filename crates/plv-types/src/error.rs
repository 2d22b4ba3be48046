use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid object id {id:?}: {reason}")]
    InvalidObjectId { id: String, reason: String },

    #[error("invalid timestamp {input:?}: expected ISO-8601 or Unix seconds")]
    InvalidTimestamp { input: String },

    #[error("unknown status {0:?}")]
    UnknownStatus(String),

    #[error("height must be >= 0, got {0}")]
    NegativeHeight(f64),

    #[error("rotation must be between 0 and 360 degrees, got {0}")]
    RotationOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, TypeError>;
