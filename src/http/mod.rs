//! HTTP client layer — `FleetrHttp` with configurable retry policies.

pub mod client;
pub mod retry;

pub use client::FleetrHttp;
pub use retry::{RetryConfig, RetryPolicy};
