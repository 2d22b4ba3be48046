//! Foundation types for Productline View (PLV).
//!
//! This crate provides the identity, spatial, and temporal types used
//! throughout the PLV system. Every other PLV crate depends on `plv-types`.
//!
//! # Key Types
//!
//! - [`ObjectId`] — Validated identifier of a productline object
//! - [`ObjectStatus`] — Operational status of an object
//! - [`Coordinates`] — Current spatial state (position, height, direction, rotation)
//! - [`HistoryRecord`] — Immutable timestamped snapshot of past state
//! - [`PointInTime`] — UTC instant parsed from ISO-8601 or Unix seconds
//! - [`StateDocument`] — The composed read model returned to clients

pub mod document;
pub mod error;
pub mod geometry;
pub mod history;
pub mod id;
pub mod object;
pub mod status;
pub mod time;

pub use document::{StateCoordinates, StateDocument};
pub use error::TypeError;
pub use geometry::{Coordinates, Direction, Position};
pub use history::HistoryRecord;
pub use id::ObjectId;
pub use object::{Metadata, ProductlineObject};
pub use status::ObjectStatus;
pub use time::PointInTime;
