//! Axum-based HTTP front end for the translation processor.
//!
//! # Components
//!
//! - `handlers`: `/translate`, `/health` and `/metrics` endpoints.
//! - `routes`: The router, with request-id, tracing and body-limit layers.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod routes;

pub use handlers::{HealthResponse, HealthStatus};
pub use routes::{create_router, AppState};
