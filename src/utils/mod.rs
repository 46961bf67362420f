//! Utility modules supporting the search pipeline.
//!
//! - [`HttpClient`]: reqwest-backed [`crate::sources::Transport`] with bounded timeouts
//! - [`RetryConfig`] / [`with_retry`]: retry transient failures with exponential backoff
//! - [`Pacer`]: randomized courtesy delay between requests
//! - [`ProgressSink`]: progress/diagnostic channel and its stock sinks
//!
//! # Retry with Backoff
//!
//! ```rust,no_run
//! use paper_hunter::sources::SourceError;
//! use paper_hunter::utils::{with_retry, RetryConfig};
//!
//! # async fn fetch_data() -> Result<String, SourceError> { Ok("data".to_string()) }
//! # #[tokio::main]
//! # async fn main() -> Result<(), SourceError> {
//! let config = RetryConfig::default().max_attempts(3);
//! let body = with_retry(config, || fetch_data()).await?;
//! # Ok(())
//! # }
//! ```

mod http;
mod pacing;
mod progress;
mod retry;

pub use http::{HttpClient, DEFAULT_USER_AGENT};
pub use pacing::Pacer;
pub use progress::{CollectingProgress, NoopProgress, ProgressSink, TracingProgress};
pub use retry::{with_retry, RetryConfig, TransientError};
