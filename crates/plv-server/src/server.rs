use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

/// Productline View API server.
pub struct PlvServer {
    config: ServerConfig,
    state: AppState,
}

impl PlvServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(&self.config, self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> anyhow::Result<()> {
        let app = build_router(&self.config, self.state);
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind_addr))?;
        tracing::info!("PLV server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .context("server terminated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = PlvServer::new(ServerConfig::default(), AppState::in_memory());
        assert_eq!(server.config().bind_addr, "0.0.0.0:5566".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = PlvServer::new(ServerConfig::default(), AppState::in_memory_demo());
        let _router = server.router();
    }
}
