//! Conference registry: which venues can be searched and how their names resolve.
//!
//! User tokens are lowercased and passed through the alias table once
//! (`neurips` -> `nips`); the result must be a catalog abbreviation. The
//! lone token `all` selects every conference in catalog order.

mod catalog;
mod registry;

pub use catalog::{ALIASES, CONFERENCES, PAGE_SUFFIXES};
pub use registry::ConferenceRegistry;

/// Errors raised while resolving conference tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConferenceError {
    /// One or more tokens do not name a known conference
    #[error("Unknown conferences: {}", .0.join(", "))]
    UnknownConference(Vec<String>),
}
