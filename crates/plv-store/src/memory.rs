use std::collections::HashMap;
use std::sync::RwLock;

use plv_types::{Coordinates, HistoryRecord, ObjectId, PointInTime, ProductlineObject};

use crate::error::StoreResult;
use crate::traits::{EntityStore, HistoryLog};

/// In-memory, HashMap-based entity store.
///
/// Intended for tests, demos, and embedding. Rows are held behind a
/// `RwLock` and cloned on read. The mutating methods model the external
/// ingestion path that a production deployment would run elsewhere.
pub struct InMemoryEntityStore {
    inner: RwLock<EntityState>,
}

#[derive(Default)]
struct EntityState {
    objects: HashMap<ObjectId, ProductlineObject>,
    coordinates: HashMap<ObjectId, Coordinates>,
}

impl InMemoryEntityStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(EntityState::default()),
        }
    }

    /// Insert or replace an object row.
    pub fn put_object(&self, object: ProductlineObject) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.objects.insert(object.id.clone(), object);
    }

    /// Insert or replace the coordinate row for an object.
    pub fn put_coordinates(&self, id: &ObjectId, coordinates: Coordinates) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.coordinates.insert(id.clone(), coordinates);
    }

    /// Delete an object, cascading to its coordinates. Returns `true` if
    /// the object existed. History cascade is owned by the history log.
    pub fn remove_object(&self, id: &ObjectId) -> bool {
        let mut state = self.inner.write().expect("lock poisoned");
        state.coordinates.remove(id);
        state.objects.remove(id).is_some()
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").objects.len()
    }

    /// Returns `true` if the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for InMemoryEntityStore {
    fn get_object(&self, id: &ObjectId) -> StoreResult<Option<ProductlineObject>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.objects.get(id).cloned())
    }

    fn get_coordinates(&self, id: &ObjectId) -> StoreResult<Option<Coordinates>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.coordinates.get(id).cloned())
    }

    fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryEntityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEntityStore")
            .field("object_count", &self.len())
            .finish()
    }
}

/// In-memory append-only history log.
///
/// Records are kept per object in append order; the log assigns a
/// monotonically increasing sequence number on append, which is the final
/// tie-breaker for duplicate timestamps.
pub struct InMemoryHistoryLog {
    inner: RwLock<LogState>,
}

#[derive(Default)]
struct LogState {
    streams: HashMap<ObjectId, Vec<HistoryRecord>>,
    next_seq: u64,
}

impl InMemoryHistoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LogState::default()),
        }
    }

    /// Append a snapshot, assigning its sequence number. Returns the
    /// assigned number. Records are immutable once appended.
    pub fn append(&self, mut record: HistoryRecord) -> u64 {
        let mut state = self.inner.write().expect("lock poisoned");
        state.next_seq += 1;
        record.seq = state.next_seq;
        let seq = record.seq;
        tracing::debug!(object_id = %record.object_id, seq, "appended history record");
        state
            .streams
            .entry(record.object_id.clone())
            .or_default()
            .push(record);
        seq
    }

    /// Drop every record for an object. Cascade target for object
    /// deletion in the entity store. Returns the number of records removed.
    pub fn purge_object(&self, id: &ObjectId) -> usize {
        let mut state = self.inner.write().expect("lock poisoned");
        state.streams.remove(id).map(|records| records.len()).unwrap_or(0)
    }

    /// Total number of records across all objects.
    pub fn len(&self) -> usize {
        let state = self.inner.read().expect("lock poisoned");
        state.streams.values().map(Vec::len).sum()
    }

    /// Returns `true` if the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryHistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog for InMemoryHistoryLog {
    fn find_latest_at_or_before(
        &self,
        id: &ObjectId,
        at: PointInTime,
    ) -> StoreResult<Option<HistoryRecord>> {
        let state = self.inner.read().expect("lock poisoned");
        let best = state.streams.get(id).and_then(|records| {
            records
                .iter()
                .filter(|record| record.timestamp <= at.instant())
                .max_by_key(|record| (record.timestamp, record.created_at, record.seq))
        });
        Ok(best.cloned())
    }

    fn find_all_for_object(&self, id: &ObjectId) -> StoreResult<Vec<HistoryRecord>> {
        let state = self.inner.read().expect("lock poisoned");
        let mut records = state.streams.get(id).cloned().unwrap_or_default();
        records.sort_by(|a, b| {
            (b.timestamp, b.created_at, b.seq).cmp(&(a.timestamp, a.created_at, a.seq))
        });
        Ok(records)
    }
}

impl std::fmt::Debug for InMemoryHistoryLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHistoryLog")
            .field("record_count", &self.len())
            .finish()
    }
}
