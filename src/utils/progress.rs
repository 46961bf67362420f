//! Progress/diagnostic channel for long-running searches.
//!
//! The search pipeline reports human-readable status lines (conference
//! recognized, pages found, per-pair counts, absorbed errors) to a
//! [`ProgressSink`]. How they are shown is up to the caller:
//!
//! ```ignore
//! use paper_hunter::utils::CollectingProgress;
//!
//! let progress = CollectingProgress::new();
//! hunter.search(&request, &progress).await?;
//! for line in progress.messages() {
//!     println!("{}", line);
//! }
//! ```

use std::sync::Mutex;

/// Append-only sink for status messages
pub trait ProgressSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&self, _message: &str) {}
}

/// Forwards messages to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&self, message: &str) {
        tracing::info!(target: "paper_hunter::progress", "{}", message.trim());
    }
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct CollectingProgress {
    messages: Mutex<Vec<String>>,
}

impl CollectingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }
}

impl ProgressSink for CollectingProgress {
    fn report(&self, message: &str) {
        if let Ok(mut guard) = self.messages.lock() {
            guard.push(message.to_string());
        }
    }
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}
