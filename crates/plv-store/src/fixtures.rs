//! Sample floor data shared by tests and the server's demo mode.

use chrono::{Duration, Utc};
use plv_types::{
    Coordinates, Direction, HistoryRecord, Metadata, ObjectId, ObjectStatus, Position,
    ProductlineObject,
};

use crate::memory::{InMemoryEntityStore, InMemoryHistoryLog};

/// Seed the three sample floor objects: a conveyor belt, a robot arm, and
/// a quality station, each with coordinates and an hourly snapshot trail.
pub fn seed_demo(entities: &InMemoryEntityStore, history: &InMemoryHistoryLog) {
    let samples = [
        (
            "OBJ_001",
            "Conveyor Belt A",
            ObjectStatus::Active,
            [("type", "conveyor"), ("speed", "1.5"), ("length", "10.0")],
        ),
        (
            "OBJ_002",
            "Robot Arm B",
            ObjectStatus::Active,
            [("type", "robot"), ("payload", "5.0"), ("reach", "2.5")],
        ),
        (
            "OBJ_003",
            "Quality Station C",
            ObjectStatus::Processing,
            [("type", "station"), ("capacity", "100"), ("cycle_time", "30")],
        ),
    ];

    for (index, (raw_id, name, status, entries)) in samples.into_iter().enumerate() {
        let id = ObjectId::new(raw_id).expect("fixture ids are valid");
        let mut metadata = Metadata::new();
        for (key, value) in entries {
            let parsed = value
                .parse::<f64>()
                .map(serde_json::Value::from)
                .unwrap_or_else(|_| serde_json::Value::from(value));
            metadata.insert(key.to_string(), parsed);
        }

        let object = ProductlineObject::new(
            id.clone(),
            Some(name.to_string()),
            status,
            Some(metadata),
        );

        let coordinates = Coordinates::new(
            Position::new(index as f64 * 2.0, 0.0, 0.0),
            1.0,
            Direction::UNIT_X,
            0.0,
        )
        .expect("fixture coordinates are valid");

        // One snapshot per hour over the last three hours.
        for hours_back in 1..=3i64 {
            let timestamp = Utc::now() - Duration::hours(hours_back);
            history.append(HistoryRecord::from_current(
                &object,
                &coordinates,
                Some(timestamp),
            ));
        }

        entities.put_coordinates(&id, coordinates);
        entities.put_object(object);
    }
}
