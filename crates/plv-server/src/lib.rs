//! HTTP boundary for Productline View.
//!
//! Translates wire requests into resolver/aggregator calls and results
//! back into wire responses. Everything behind the router is the read
//! core; everything here is validation, status-code mapping, and probes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod validation;

pub use config::{PoolConfig, ServerConfig};
pub use error::ApiError;
pub use server::PlvServer;
pub use state::AppState;
