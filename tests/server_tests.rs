// HTTP front end tests
// Author: kelexine (https://github.com/kelexine)

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::{envelope_with_content, ScriptedExchange};
use honyaku::config::AppConfig;
use honyaku::server::create_router;
use honyaku::{ClientConfig, TranslationRequestProcessor};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app(exchange: Arc<ScriptedExchange>) -> axum::Router {
    let config = ClientConfig::new("k", Some("https://upstream.test/v1/chat/completions")).unwrap();
    let processor = TranslationRequestProcessor::with_exchange(config, exchange);
    create_router(AppConfig::default(), processor)
}

async fn post_translate(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/translate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_translate_success() {
    let exchange = Arc::new(ScriptedExchange::replying(
        200,
        envelope_with_content(
            r#"{"translation": "Hello", "katakana": "ハロー", "ruby_text": "Hello{ハロー}"}"#,
        ),
    ));

    let body = r#"{"text": "こんにちは", "source": "japanese"}"#;
    let (status, body) = post_translate(app(exchange), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translation"], "Hello");
    assert_eq!(body["ruby_text"], "Hello{ハロー}");
}

#[tokio::test]
async fn test_missing_text_is_bad_request() {
    let exchange = Arc::new(ScriptedExchange::replying(200, envelope_with_content("{}")));

    let (status, body) = post_translate(app(exchange.clone()), r#"{"target": "french"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(exchange.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let exchange = Arc::new(ScriptedExchange::replying(200, envelope_with_content("{}")));

    let (status, _) = post_translate(app(exchange), "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_is_service_unavailable() {
    let exchange = Arc::new(ScriptedExchange::replying(500, "oops"));

    let (status, body) = post_translate(app(exchange), r#"{"text": "hi"}"#).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["type"], "service_unavailable");
}

#[tokio::test]
async fn test_unparseable_reply_is_internal_error() {
    let exchange = Arc::new(ScriptedExchange::replying(200, envelope_with_content("Sorry, no.")));

    let (status, body) = post_translate(app(exchange), r#"{"text": "hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "parse_error");
}

#[tokio::test]
async fn test_health_reports_endpoint() {
    let exchange = Arc::new(ScriptedExchange::replying(200, "{}"));

    let response = app(exchange)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["checks"]["endpoint"]["message"].as_str().unwrap().contains("upstream.test"));
}
