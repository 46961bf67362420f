//! # Paper Hunter
//!
//! Finds paper titles of computer-science conferences on DBLP and filters
//! them by keyword.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`conferences`]: Conference registry, aliases and the built-in catalog
//! - [`sources`]: Remote source boundary and the two locate strategies
//! - [`extract`]: Title extraction from API JSON and table-of-contents HTML
//! - [`filter`]: Keyword filtering
//! - [`hunter`]: Search orchestration
//! - [`models`]: Core data structures (PaperRecord, SearchRequest, etc.)
//! - [`utils`]: HTTP client, retry, pacing and progress reporting
//! - [`config`]: Configuration management
//!
//! ## Example
//!
//! ```rust,no_run
//! use paper_hunter::{Config, PaperHunter, SearchRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let hunter = PaperHunter::from_config(&Config::default())?;
//! let request = SearchRequest::new(["neurips"])
//!     .years([2023])
//!     .keywords_any(["diffusion"]);
//!
//! for paper in hunter.search_papers(&request).await? {
//!     println!("{}", paper);
//! }
//! # Ok(())
//! # }
//! ```

pub mod conferences;
pub mod config;
pub mod extract;
pub mod filter;
pub mod hunter;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use conferences::ConferenceRegistry;
pub use config::Config;
pub use hunter::{HunterError, PaperHunter};
pub use models::{PaperRecord, SearchReport, SearchRequest};
pub use sources::{LocateStrategy, SourceError, StrategyKind, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
