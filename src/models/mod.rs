//! Core data models for conferences, search requests and results.

mod conference;
mod paper;
mod search;

pub use conference::{AliasEntry, ConferenceEntry};
pub use paper::PaperRecord;
pub use search::{
    PairSummary, ResourceLocation, ResponseShape, SearchReport, SearchRequest, ALL_CONFERENCES,
};
