use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all PLV endpoints.
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let api = Router::new()
        .route("/objects/batch", post(handler::get_objects_batch))
        .route("/objects/:object_id", get(handler::get_object))
        .route(
            "/objects/:object_id/history",
            get(handler::get_object_history),
        )
        .route("/health", get(handler::health))
        .route("/health/ready", get(handler::ready))
        .route("/health/live", get(handler::live));

    Router::new()
        .nest("/api/v1", api)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
