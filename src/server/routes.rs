// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{health_handler, metrics_handler, translate_handler};
use crate::config::AppConfig;
use crate::translation::TranslationRequestProcessor;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected before deserialization.
const BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub processor: Arc<TranslationRequestProcessor>,
}

pub fn create_router(config: AppConfig, processor: TranslationRequestProcessor) -> Router {
    let state = AppState {
        config,
        processor: Arc::new(processor),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/translate", post(translate_handler))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
