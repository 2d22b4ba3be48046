use std::sync::Arc;

use plv_store::{EntityStore, HistoryLog};
use plv_types::{
    Coordinates, HistoryRecord, ObjectId, PointInTime, ProductlineObject, StateDocument,
};

use crate::error::ResolveError;
use crate::source::{Resolution, ResolutionSource};

/// Read-side orchestrator producing the effective state of one object.
///
/// Holds injected store handles and no other state; every call performs at
/// most two sequential reads (object lookup, then coordinates or history).
pub struct StateResolver {
    entities: Arc<dyn EntityStore>,
    history: Arc<dyn HistoryLog>,
}

impl StateResolver {
    pub fn new(entities: Arc<dyn EntityStore>, history: Arc<dyn HistoryLog>) -> Self {
        Self { entities, history }
    }

    /// Resolve an object's state, either current (`at` absent) or as of
    /// the given instant.
    ///
    /// Historical queries prefer the most recent snapshot at-or-before
    /// `at`; when none exists the current state is returned with the
    /// requested instant attached, so callers can tell reconstruction
    /// from history apart from the fallback. An object with no stored
    /// coordinates resolves to the default coordinate set rather than
    /// failing.
    pub fn resolve(
        &self,
        id: &ObjectId,
        at: Option<PointInTime>,
    ) -> Result<Resolution, ResolveError> {
        let object = self
            .entities
            .get_object(id)?
            .ok_or_else(|| ResolveError::NotFound(id.clone()))?;

        let resolution = match at {
            None => self.compose_current(&object, None)?,
            Some(at) => match self.history.find_latest_at_or_before(id, at)? {
                Some(record) => compose_historical(&object, &record),
                None => self.compose_current(&object, Some(at))?,
            },
        };

        tracing::info!(
            object_id = %id,
            source = ?resolution.source,
            "resolved object state"
        );
        Ok(resolution)
    }

    fn compose_current(
        &self,
        object: &ProductlineObject,
        requested: Option<PointInTime>,
    ) -> Result<Resolution, ResolveError> {
        let stored = self.entities.get_coordinates(&object.id)?;
        let synthesized_coordinates = stored.is_none();
        let coordinates = stored.unwrap_or_else(Coordinates::default_set);

        let source = if requested.is_some() {
            ResolutionSource::FromCurrentAtRequested
        } else {
            ResolutionSource::FromCurrent
        };

        let document = StateDocument {
            object_id: object.id.clone(),
            name: object.name.clone(),
            status: object.status,
            metadata: object.metadata.clone(),
            created_at: object.created_at,
            updated_at: object.updated_at,
            timestamp: requested.map(|at| at.instant()),
            coordinates: (&coordinates).into(),
        };

        Ok(Resolution {
            document,
            source,
            synthesized_coordinates,
        })
    }
}

/// Compose a document from a history snapshot.
///
/// Identity fields come from the live object; state fields come from the
/// snapshot, with `status`/`metadata` falling back to the object's current
/// values when the snapshot left them unset. The document's effective
/// timestamp is the snapshot's.
fn compose_historical(object: &ProductlineObject, record: &HistoryRecord) -> Resolution {
    let document = StateDocument {
        object_id: object.id.clone(),
        name: object.name.clone(),
        status: record.status.unwrap_or(object.status),
        metadata: record.metadata.clone().or_else(|| object.metadata.clone()),
        created_at: object.created_at,
        updated_at: record.timestamp,
        timestamp: Some(record.timestamp),
        coordinates: record.into(),
    };

    Resolution {
        document,
        source: ResolutionSource::FromHistory,
        synthesized_coordinates: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use plv_store::{InMemoryEntityStore, InMemoryHistoryLog, StoreError, StoreResult};
    use plv_types::{Direction, Metadata, ObjectStatus, Position};

    fn id(raw: &str) -> ObjectId {
        ObjectId::new(raw).unwrap()
    }

    fn setup() -> (Arc<InMemoryEntityStore>, Arc<InMemoryHistoryLog>, StateResolver) {
        let entities = Arc::new(InMemoryEntityStore::new());
        let history = Arc::new(InMemoryHistoryLog::new());
        let resolver = StateResolver::new(entities.clone(), history.clone());
        (entities, history, resolver)
    }

    fn put_object(entities: &InMemoryEntityStore, raw: &str) -> ProductlineObject {
        let mut metadata = Metadata::new();
        metadata.insert("type".into(), "conveyor".into());
        let object = ProductlineObject::new(
            id(raw),
            Some(format!("Object {raw}")),
            ObjectStatus::Active,
            Some(metadata),
        );
        entities.put_object(object.clone());
        object
    }

    // -----------------------------------------------------------------------
    // Current-state resolution
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_object_is_not_found() {
        let (_, _, resolver) = setup();
        let result = resolver.resolve(&id("MISSING"), None);
        assert!(matches!(result, Err(ResolveError::NotFound(_))));
    }

    #[test]
    fn missing_coordinates_synthesize_default() {
        let (entities, _, resolver) = setup();
        put_object(&entities, "OBJ_001");

        let resolution = resolver.resolve(&id("OBJ_001"), None).unwrap();
        assert_eq!(resolution.source, ResolutionSource::FromCurrent);
        assert!(resolution.synthesized_coordinates);

        let coords = &resolution.document.coordinates;
        assert_eq!(coords.position, Some(Position::ORIGIN));
        assert_eq!(coords.height, Some(0.0));
        assert_eq!(coords.direction, Some(Direction::UNIT_X));
        assert_eq!(coords.rotation, Some(0.0));
        assert!(resolution.document.timestamp.is_none());
    }

    #[test]
    fn stored_coordinates_are_used() {
        let (entities, _, resolver) = setup();
        put_object(&entities, "OBJ_001");
        let coordinates = Coordinates::new(
            Position::new(4.0, 5.0, 6.0),
            2.5,
            Direction::new(0.0, 1.0, 0.0),
            90.0,
        )
        .unwrap();
        entities.put_coordinates(&id("OBJ_001"), coordinates);

        let resolution = resolver.resolve(&id("OBJ_001"), None).unwrap();
        assert!(!resolution.synthesized_coordinates);
        assert_eq!(
            resolution.document.coordinates.position,
            Some(Position::new(4.0, 5.0, 6.0))
        );
        assert_eq!(resolution.document.coordinates.rotation, Some(90.0));
    }

    #[test]
    fn document_carries_object_fields() {
        let (entities, _, resolver) = setup();
        let object = put_object(&entities, "OBJ_001");

        let document = resolver.resolve(&id("OBJ_001"), None).unwrap().document;
        assert_eq!(document.object_id, object.id);
        assert_eq!(document.name, object.name);
        assert_eq!(document.status, object.status);
        assert_eq!(document.metadata, object.metadata);
        assert_eq!(document.created_at, object.created_at);
        assert_eq!(document.updated_at, object.updated_at);
    }

    #[test]
    fn repeated_resolution_is_identical() {
        let (entities, _, resolver) = setup();
        put_object(&entities, "OBJ_001");
        entities.put_coordinates(&id("OBJ_001"), Coordinates::default_set());

        let first = resolver.resolve(&id("OBJ_001"), None).unwrap();
        let second = resolver.resolve(&id("OBJ_001"), None).unwrap();
        assert_eq!(first.document, second.document);
    }

    // -----------------------------------------------------------------------
    // Historical resolution
    // -----------------------------------------------------------------------

    fn snapshot(raw: &str, timestamp: chrono::DateTime<Utc>, rotation: f64) -> HistoryRecord {
        HistoryRecord::new(
            id(raw),
            timestamp,
            Some(Position::new(1.0, 1.0, 1.0)),
            Some(1.0),
            Some(Direction::UNIT_X),
            Some(rotation),
            Some(ObjectStatus::Processing),
            None,
        )
    }

    #[test]
    fn history_hit_uses_snapshot_fields() {
        let (entities, history, resolver) = setup();
        put_object(&entities, "OBJ_001");
        let at = Utc::now() - Duration::hours(1);
        history.append(snapshot("OBJ_001", at, 45.0));

        let resolution = resolver
            .resolve(&id("OBJ_001"), Some(PointInTime::new(Utc::now())))
            .unwrap();
        assert_eq!(resolution.source, ResolutionSource::FromHistory);
        assert_eq!(resolution.document.status, ObjectStatus::Processing);
        assert_eq!(resolution.document.coordinates.rotation, Some(45.0));
        assert_eq!(resolution.document.timestamp, Some(at));
        assert_eq!(resolution.document.updated_at, at);
    }

    #[test]
    fn exact_timestamp_prefers_that_record() {
        let (entities, history, resolver) = setup();
        put_object(&entities, "OBJ_001");
        let at = Utc::now() - Duration::hours(1);
        history.append(snapshot("OBJ_001", at - Duration::seconds(1), 10.0));
        history.append(snapshot("OBJ_001", at, 20.0));

        let resolution = resolver
            .resolve(&id("OBJ_001"), Some(PointInTime::new(at)))
            .unwrap();
        assert_eq!(resolution.document.coordinates.rotation, Some(20.0));
        assert_eq!(resolution.document.timestamp, Some(at));
    }

    #[test]
    fn snapshot_nulls_fall_back_to_current_object() {
        let (entities, history, resolver) = setup();
        let object = put_object(&entities, "OBJ_001");
        let at = Utc::now() - Duration::hours(1);
        // Spatial-only snapshot: status and metadata unset.
        history.append(HistoryRecord::new(
            id("OBJ_001"),
            at,
            Some(Position::new(9.0, 9.0, 9.0)),
            Some(3.0),
            None,
            None,
            None,
            None,
        ));

        let document = resolver
            .resolve(&id("OBJ_001"), Some(PointInTime::new(Utc::now())))
            .unwrap()
            .document;
        assert_eq!(document.status, object.status);
        assert_eq!(document.metadata, object.metadata);
        assert_eq!(document.coordinates.position, Some(Position::new(9.0, 9.0, 9.0)));
        assert!(document.coordinates.direction.is_none());
    }

    #[test]
    fn history_miss_falls_back_with_requested_timestamp() {
        let (entities, history, resolver) = setup();
        put_object(&entities, "OBJ_001");
        let requested = Utc::now() - Duration::days(30);
        // Only snapshots after the requested instant exist.
        history.append(snapshot("OBJ_001", Utc::now(), 15.0));

        let resolution = resolver
            .resolve(&id("OBJ_001"), Some(PointInTime::new(requested)))
            .unwrap();
        assert_eq!(resolution.source, ResolutionSource::FromCurrentAtRequested);
        assert!(resolution.synthesized_coordinates);
        assert_eq!(resolution.document.timestamp, Some(requested));
    }

    #[test]
    fn history_miss_with_stored_coordinates() {
        let (entities, _, resolver) = setup();
        put_object(&entities, "OBJ_001");
        entities.put_coordinates(&id("OBJ_001"), Coordinates::default_set());
        let requested = Utc::now() - Duration::days(1);

        let resolution = resolver
            .resolve(&id("OBJ_001"), Some(PointInTime::new(requested)))
            .unwrap();
        assert_eq!(resolution.source, ResolutionSource::FromCurrentAtRequested);
        assert!(!resolution.synthesized_coordinates);
        assert_eq!(resolution.document.timestamp, Some(requested));
    }

    // -----------------------------------------------------------------------
    // Failure propagation
    // -----------------------------------------------------------------------

    struct UnavailableStore;

    impl EntityStore for UnavailableStore {
        fn get_object(&self, _: &ObjectId) -> StoreResult<Option<ProductlineObject>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        fn get_coordinates(&self, _: &ObjectId) -> StoreResult<Option<Coordinates>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        fn ping(&self) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    struct CorruptCoordinatesStore {
        object: ProductlineObject,
    }

    impl EntityStore for CorruptCoordinatesStore {
        fn get_object(&self, _: &ObjectId) -> StoreResult<Option<ProductlineObject>> {
            Ok(Some(self.object.clone()))
        }

        fn get_coordinates(&self, id: &ObjectId) -> StoreResult<Option<Coordinates>> {
            Err(StoreError::Corrupted {
                object_id: id.to_string(),
                reason: "unexpected null in position".into(),
            })
        }

        fn ping(&self) -> StoreResult<()> {
            Ok(())
        }
    }

    #[test]
    fn unavailable_store_surfaces_infrastructure() {
        let history = Arc::new(InMemoryHistoryLog::new());
        let resolver = StateResolver::new(Arc::new(UnavailableStore), history);
        let result = resolver.resolve(&id("OBJ_001"), None);
        assert!(matches!(result, Err(ResolveError::Infrastructure(_))));
    }

    #[test]
    fn corrupt_row_surfaces_retrieval_error() {
        let object = ProductlineObject::new(id("OBJ_001"), None, ObjectStatus::Active, None);
        let resolver = StateResolver::new(
            Arc::new(CorruptCoordinatesStore { object }),
            Arc::new(InMemoryHistoryLog::new()),
        );
        let result = resolver.resolve(&id("OBJ_001"), None);
        assert!(matches!(result, Err(ResolveError::Retrieval { .. })));
    }
}
