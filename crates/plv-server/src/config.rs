use std::net::SocketAddr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Connection admission limits handed to the store layer.
///
/// The core performs no retries or timeouts of its own; a resolution
/// blocks waiting for a pool slot up to these limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolConfig {
    pub max_connections: usize,
    pub max_overflow: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            max_overflow: 30,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins. Empty means allow any origin.
    pub cors_origins: Vec<String>,
    /// Seed the in-memory stores with the sample floor data on startup.
    pub demo_mode: bool,
    pub pool: PoolConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5566".parse().expect("valid default address"),
            cors_origins: Vec::new(),
            demo_mode: false,
            pool: PoolConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `PLV_BIND_ADDR`, `PLV_CORS_ORIGINS`
    /// (comma-separated), `PLV_DEMO`, `PLV_POOL_SIZE`, `PLV_POOL_OVERFLOW`.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("PLV_BIND_ADDR") {
            config.bind_addr = raw
                .parse()
                .with_context(|| format!("invalid PLV_BIND_ADDR {raw:?}"))?;
        }
        if let Ok(raw) = std::env::var("PLV_CORS_ORIGINS") {
            config.cors_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Ok(raw) = std::env::var("PLV_DEMO") {
            config.demo_mode = matches!(raw.as_str(), "1" | "true" | "yes");
        }
        if let Ok(raw) = std::env::var("PLV_POOL_SIZE") {
            config.pool.max_connections = raw
                .parse()
                .with_context(|| format!("invalid PLV_POOL_SIZE {raw:?}"))?;
        }
        if let Ok(raw) = std::env::var("PLV_POOL_OVERFLOW") {
            config.pool.max_overflow = raw
                .parse()
                .with_context(|| format!("invalid PLV_POOL_OVERFLOW {raw:?}"))?;
        }

        Ok(config)
    }
}
