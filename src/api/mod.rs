use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{config::RelayConfig, provider::GeminiClient};

pub mod handlers;
pub mod types;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub provider: GeminiClient,
}

impl AppState {
    pub fn new(config: RelayConfig) -> anyhow::Result<Self> {
        let provider = GeminiClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            provider,
        })
    }
}

/// Relay routes with open CORS, state attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/api/health", get(handlers::health))
        .route("/api/generate-content", post(handlers::generate_content))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
