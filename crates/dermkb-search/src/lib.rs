//! DermKB Search Layer
//!
//! Relevance-ranked search over the knowledge corpus and relation discovery
//! between records.
//!
//! # Overview
//!
//! - `SearchEngine`: tokenizes a free-text query, gathers candidates from
//!   the store's term index (with a substring fallback for free-text
//!   "contains" parity), scores title matches over body matches, and ranks
//!   with a stable sort.
//! - `RelationFinder`: surfaces records sharing a category or tags with a
//!   given record, in corpus order.
//!
//! Both are read-only over the shared store and safe to call from many
//! requests in parallel.

#![warn(missing_docs)]

mod query;
mod relations;

pub use query::{SearchEngine, SearchResponse, SearchResult};
pub use relations::RelationFinder;

use thiserror::Error;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Empty or whitespace-only query
    #[error("Search query required")]
    InvalidQuery,

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),
}
