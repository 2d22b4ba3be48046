//! The composed read model returned to visualization clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{Coordinates, Direction, Position};
use crate::history::HistoryRecord;
use crate::id::ObjectId;
use crate::object::Metadata;
use crate::status::ObjectStatus;

/// Coordinate fields of a state document.
///
/// Every field is optional because a historical snapshot may be partial;
/// missing field groups surface as `null` rather than fabricated zeros.
/// Current-state composition always fills every field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateCoordinates {
    pub position: Option<Position>,
    pub height: Option<f64>,
    pub direction: Option<Direction>,
    pub rotation: Option<f64>,
}

impl From<&Coordinates> for StateCoordinates {
    fn from(coordinates: &Coordinates) -> Self {
        Self {
            position: Some(coordinates.position),
            height: Some(coordinates.height),
            direction: Some(coordinates.direction),
            rotation: Some(coordinates.rotation),
        }
    }
}

impl From<&HistoryRecord> for StateCoordinates {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            position: record.position,
            height: record.height,
            direction: record.direction,
            rotation: record.rotation,
        }
    }
}

/// Effective state of one object, merging identity with either current
/// coordinates or a reconstructed historical snapshot.
///
/// `timestamp` is only present on historical results: either the
/// snapshot's own timestamp, or the originally requested instant when the
/// resolver fell back to current state. Pure current-state documents carry
/// no `timestamp` field at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    pub object_id: ObjectId,
    pub name: Option<String>,
    pub status: ObjectStatus,
    pub metadata: Option<Metadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub coordinates: StateCoordinates,
}
