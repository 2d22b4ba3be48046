use serde::{Deserialize, Serialize};

use plv_types::{ObjectId, PointInTime, StateDocument};

use crate::error::{BatchError, ResolveError};
use crate::resolver::StateResolver;

/// Maximum number of ids a single batch call may carry.
pub const MAX_BATCH_SIZE: usize = 50;

/// Machine-readable code attached to each per-item batch error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchErrorCode {
    ObjectNotFound,
    RetrievalError,
}

/// One failed item of a batch. Self-describing via `object_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchItemError {
    pub object_id: ObjectId,
    pub error: String,
    pub code: BatchErrorCode,
}

/// Combined result of a batch resolution.
///
/// A batch never fails for per-item reasons: an all-invalid input yields
/// an empty `objects` array and a full `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub objects: Vec<StateDocument>,
    pub errors: Vec<BatchItemError>,
}

/// Fans a resolver call out across many ids with per-item isolation.
pub struct BatchAggregator {
    resolver: StateResolver,
}

impl BatchAggregator {
    pub fn new(resolver: StateResolver) -> Self {
        Self { resolver }
    }

    /// Resolve each id against the same optional instant, sequentially in
    /// input order.
    ///
    /// Oversized input is the one structural failure; the boundary
    /// rejects it before this point, but the cap is enforced here as well
    /// rather than silently truncating. Every other failure is contained
    /// in the outcome's `errors`.
    pub fn resolve_batch(
        &self,
        ids: &[ObjectId],
        at: Option<PointInTime>,
    ) -> Result<BatchOutcome, BatchError> {
        if ids.len() > MAX_BATCH_SIZE {
            return Err(BatchError::Oversized {
                count: ids.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let mut outcome = BatchOutcome::default();
        for id in ids {
            match self.resolver.resolve(id, at) {
                Ok(resolution) => outcome.objects.push(resolution.document),
                Err(ResolveError::NotFound(_)) => outcome.errors.push(BatchItemError {
                    object_id: id.clone(),
                    error: "Object not found".into(),
                    code: BatchErrorCode::ObjectNotFound,
                }),
                Err(err) => {
                    tracing::warn!(object_id = %id, error = %err, "batch item failed");
                    outcome.errors.push(BatchItemError {
                        object_id: id.clone(),
                        error: err.to_string(),
                        code: BatchErrorCode::RetrievalError,
                    });
                }
            }
        }

        tracing::info!(
            objects = outcome.objects.len(),
            errors = outcome.errors.len(),
            "batch request processed"
        );
        Ok(outcome)
    }
}
