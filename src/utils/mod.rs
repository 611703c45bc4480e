//! Utility functions and helpers for the translation client.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and credential scrubbing.
//! - `retry`: Bounded retry combinator with a pluggable backoff schedule.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
pub mod retry;
