use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ObjectId;
use crate::status::ObjectStatus;

/// Open-ended metadata document attached to an object.
///
/// The core passes this through without interpreting keys; key order is
/// preserved end to end.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A named physical asset tracked on the factory floor.
///
/// Created once by the external provisioning process; status and metadata
/// are mutated in place by the same external writer. `updated_at` is
/// monotonically non-decreasing and bumped on every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductlineObject {
    pub id: ObjectId,
    pub name: Option<String>,
    pub status: ObjectStatus,
    pub metadata: Option<Metadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductlineObject {
    pub fn new(
        id: ObjectId,
        name: Option<String>,
        status: ObjectStatus,
        metadata: Option<Metadata>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            status,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, status: ObjectStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Merge keys into the metadata document, overwriting existing keys.
    pub fn update_metadata(&mut self, entries: Metadata) {
        let metadata = self.metadata.get_or_insert_with(Metadata::new);
        for (key, value) in entries {
            metadata.insert(key, value);
        }
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        self.status == ObjectStatus::Active
    }

    /// Returns `true` unless the object is in the error state.
    pub fn can_be_retrieved(&self) -> bool {
        self.status != ObjectStatus::Error
    }
}
