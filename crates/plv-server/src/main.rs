use plv_server::{AppState, PlvServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;

    // Persistent backends plug in through the store traits; this binary
    // runs the in-memory stores, seeded with sample data in demo mode.
    let state = if config.demo_mode {
        tracing::info!("demo mode: seeding sample floor data");
        AppState::in_memory_demo()
    } else {
        AppState::in_memory()
    };

    PlvServer::new(config, state).serve().await
}
