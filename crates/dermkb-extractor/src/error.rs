//! Error types for the extraction engine

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Extraction type was empty or unset
    #[error("Extraction type required")]
    InvalidExtractionType,

    /// Document not found (or the id points at Q&A reference data)
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Record store error
    #[error("Store error: {0}")]
    Store(String),
}
