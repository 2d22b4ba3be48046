use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{Coordinates, Direction, Position};
use crate::id::ObjectId;
use crate::object::{Metadata, ProductlineObject};
use crate::status::ObjectStatus;

/// Immutable snapshot of an object's state at a point in time.
///
/// `timestamp` is the instant the snapshot represents; `created_at` is
/// when the record was written. Snapshots may be partial: any of the
/// spatial fields, status, or metadata may be absent. Multiple records may
/// share the same `(object_id, timestamp)` pair.
///
/// `seq` is the internal sequence number assigned by the history log on
/// append; it is the final tie-breaker for duplicate timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub object_id: ObjectId,
    pub timestamp: DateTime<Utc>,
    pub position: Option<Position>,
    pub height: Option<f64>,
    pub direction: Option<Direction>,
    pub rotation: Option<f64>,
    pub status: Option<ObjectStatus>,
    pub metadata: Option<Metadata>,
    pub created_at: DateTime<Utc>,
    pub seq: u64,
}

impl HistoryRecord {
    /// Create a snapshot with the given fields. `seq` starts at zero and
    /// is assigned by the history log when the record is appended.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        object_id: ObjectId,
        timestamp: DateTime<Utc>,
        position: Option<Position>,
        height: Option<f64>,
        direction: Option<Direction>,
        rotation: Option<f64>,
        status: Option<ObjectStatus>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            object_id,
            timestamp,
            position,
            height,
            direction,
            rotation,
            status,
            metadata,
            created_at: Utc::now(),
            seq: 0,
        }
    }

    /// Capture a full snapshot from an object's current state.
    ///
    /// The snapshot timestamp defaults to now when not supplied.
    pub fn from_current(
        object: &ProductlineObject,
        coordinates: &Coordinates,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self::new(
            object.id.clone(),
            timestamp.unwrap_or_else(Utc::now),
            Some(coordinates.position),
            Some(coordinates.height),
            Some(coordinates.direction),
            Some(coordinates.rotation),
            Some(object.status),
            object.metadata.clone(),
        )
    }
}
