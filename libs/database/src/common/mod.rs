//! Helpers that are not tied to a particular driver.

pub mod retry;

pub use retry::{RetryConfig, retry_with_backoff};
