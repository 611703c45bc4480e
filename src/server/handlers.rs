// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::TranslatorError;
use crate::models::{TranslationRequest, TranslationResult};
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    let client = state.processor.config();
    let endpoint_check = if client.api_endpoint().starts_with("https://") {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Endpoint: {}", client.api_endpoint()),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: format!("Endpoint is not using TLS: {}", client.api_endpoint()),
        }
    };
    checks.insert("endpoint".to_string(), endpoint_check);

    checks.insert(
        "model".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Model: {}", client.model()),
        },
    );

    checks.insert(
        "server".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!(
                "Listening on {}:{}",
                state.config.server.host, state.config.server.port
            ),
        },
    );

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /translate`
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TranslationResult>, TranslatorError> {
    // Deserialize manually so malformed bodies surface as InvalidInput
    let req: TranslationRequest = serde_json::from_str(&body).map_err(|e| {
        error!("Failed to deserialize translate request: {}", e);
        TranslatorError::InvalidInput(format!("JSON deserialization error: {}", e))
    })?;

    debug!(
        "Received translate request: target={}, source={}, style={}",
        req.target_language, req.source_language, req.style
    );

    let result = state.processor.translate(&req).await?;
    Ok(Json(result))
}

/// Handler for `GET /metrics`
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}
