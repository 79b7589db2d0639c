use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{
    handlers::{handle_asset, handle_generate_url},
    state::AppState,
};
use crate::config::Config;

/// Create the application router.
pub fn create_router(config: Config) -> anyhow::Result<Router> {
    let cors_origin = config.cors_allowed_origin.clone();
    let state = AppState::new(config);

    let cors = if cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(cors_origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/generate-url", get(handle_generate_url))
        .route("/hls/{*path}", get(handle_asset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn health_check() -> &'static str {
    "Server is running!"
}
