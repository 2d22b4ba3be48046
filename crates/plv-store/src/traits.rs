use plv_types::{Coordinates, HistoryRecord, ObjectId, PointInTime, ProductlineObject};

use crate::error::StoreResult;

/// Durable keyed storage for object identity and current coordinates.
///
/// The read core treats this store as read-only; writes belong to the
/// external ingestion path. Implementations must satisfy:
/// - At most one live coordinate set per object id.
/// - `Ok(None)` means the row does not exist — it is not a failure. An
///   object may legitimately have no coordinates yet.
/// - Deleting an object cascades to its coordinates (and to its history,
///   via the owning [`HistoryLog`]).
/// - All I/O errors are propagated, never silently ignored.
pub trait EntityStore: Send + Sync {
    /// Look up an object by id.
    fn get_object(&self, id: &ObjectId) -> StoreResult<Option<ProductlineObject>>;

    /// Look up the current coordinates of an object.
    fn get_coordinates(&self, id: &ObjectId) -> StoreResult<Option<Coordinates>>;

    /// Probe store availability. Used by health checks only.
    fn ping(&self) -> StoreResult<()>;
}

/// Durable append-only storage of timestamped state snapshots.
pub trait HistoryLog: Send + Sync {
    /// Return the snapshot with the greatest `timestamp <= at`.
    ///
    /// A record exactly at `at` counts as "at or before" and is preferred
    /// over the same object's record immediately following it. Duplicate
    /// timestamps are legal; the tie-break is deterministic: greatest
    /// `created_at` wins, then the greatest internal sequence number
    /// assigned on append.
    fn find_latest_at_or_before(
        &self,
        id: &ObjectId,
        at: PointInTime,
    ) -> StoreResult<Option<HistoryRecord>>;

    /// All snapshots for an object, descending by timestamp.
    ///
    /// Diagnostics and export surface; not on the resolver's hot path.
    fn find_all_for_object(&self, id: &ObjectId) -> StoreResult<Vec<HistoryRecord>>;
}
