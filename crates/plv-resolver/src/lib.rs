//! Temporal state resolution for Productline View.
//!
//! [`StateResolver`] computes the effective state of one object either
//! "now" or "as of" a point in time, combining the entity store's current
//! rows with the history log's most recent snapshot at-or-before the
//! requested instant. [`BatchAggregator`] fans the same resolution out
//! across a bounded set of ids, isolating failures per item.
//!
//! Both are pure read-side orchestrators: they own no persisted state and
//! hold dependency-injected store handles.

pub mod batch;
pub mod error;
pub mod resolver;
pub mod source;

pub use batch::{BatchAggregator, BatchErrorCode, BatchItemError, BatchOutcome, MAX_BATCH_SIZE};
pub use error::{BatchError, ResolveError};
pub use resolver::StateResolver;
pub use source::{Resolution, ResolutionSource};
