//! Wire-level request validation.
//!
//! Everything here runs before the core is touched: the resolver and
//! aggregator trust already-validated input.

use serde::Deserialize;

use plv_resolver::MAX_BATCH_SIZE;
use plv_types::{ObjectId, PointInTime};

use crate::error::ApiError;

/// Body of a batch retrieval request.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub object_ids: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Validate and convert a raw object id.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::new(raw).map_err(|err| ApiError::InvalidObjectId(err.to_string()))
}

/// Parse an optional timestamp query parameter.
pub fn parse_timestamp(raw: Option<&str>) -> Result<Option<PointInTime>, ApiError> {
    match raw {
        None => Ok(None),
        Some(raw) => PointInTime::parse(raw)
            .map(Some)
            .map_err(|err| ApiError::InvalidTimestamp(err.to_string())),
    }
}

/// Validate a batch request: size bound first, then every id, then the
/// optional timestamp. Oversized or malformed input never reaches the
/// aggregator.
pub fn parse_batch(request: &BatchRequest) -> Result<(Vec<ObjectId>, Option<PointInTime>), ApiError> {
    if request.object_ids.len() > MAX_BATCH_SIZE {
        return Err(ApiError::InvalidBatchRequest(format!(
            "at most {MAX_BATCH_SIZE} object ids per request, got {}",
            request.object_ids.len()
        )));
    }

    let mut ids = Vec::with_capacity(request.object_ids.len());
    for raw in &request.object_ids {
        let id = ObjectId::new(raw)
            .map_err(|err| ApiError::InvalidBatchRequest(err.to_string()))?;
        ids.push(id);
    }

    let at = match request.timestamp.as_deref() {
        None => None,
        Some(raw) => Some(
            PointInTime::parse(raw)
                .map_err(|err| ApiError::InvalidBatchRequest(err.to_string()))?,
        ),
    };

    Ok((ids, at))
}
