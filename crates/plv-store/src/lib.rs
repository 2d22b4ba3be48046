//! Storage seams for Productline View.
//!
//! The read core needs exactly two durable collaborators: a keyed store
//! for object identity and current coordinates ([`EntityStore`]), and an
//! append-only log of timestamped snapshots ([`HistoryLog`]). Both are
//! trait seams so the resolver never binds to a database engine; the
//! in-memory implementations back tests, demos, and embedding.

pub mod error;
pub mod fixtures;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryEntityStore, InMemoryHistoryLog};
pub use traits::{EntityStore, HistoryLog};
