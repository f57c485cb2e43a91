//! DermKB Extraction Engine
//!
//! Pulls structured fields out of stored document text on demand.
//!
//! # Overview
//!
//! An extraction request names a document and an extraction type. The
//! engine dispatches to a typed field extractor (`summary`,
//! `key_findings`, `recommendations`, `entities`); any other non-empty
//! type falls through to a generic extractor that returns the whole
//! normalized text, so an unrecognized-but-present label never errors.
//!
//! # Example
//!
//! ```no_run
//! use dermkb_extractor::{ExtractionEngine, ExtractorConfig};
//! use dermkb_store::MemoryStore;
//! use dermkb_domain::RecordId;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::with_seed()?);
//! let engine = ExtractionEngine::new(store, ExtractorConfig::default());
//!
//! let result = engine.extract(&RecordId::from("doc-1"), "summary")?;
//! println!("{} fields extracted", result.fields.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractors;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use types::{ExtractionResult, FieldValue};

use dermkb_domain::traits::RecordStore;
use dermkb_domain::{RecordId, RecordKind};
use dermkb_store::{MemoryStore, StoreError};
use std::sync::Arc;
use tracing::debug;

/// The extraction engine applies typed field extractors to stored documents
pub struct ExtractionEngine {
    store: Arc<MemoryStore>,
    config: ExtractorConfig,
}

impl ExtractionEngine {
    /// Create an extraction engine over the given store
    pub fn new(store: Arc<MemoryStore>, config: ExtractorConfig) -> Self {
        Self { store, config }
    }

    /// Extract structured fields from a document
    ///
    /// # Errors
    ///
    /// - `ExtractError::InvalidExtractionType` when the type is empty or
    ///   whitespace-only
    /// - `ExtractError::NotFound` when the id is absent or names Q&A
    ///   reference data rather than a document
    pub fn extract(
        &self,
        document_id: &RecordId,
        extraction_type: &str,
    ) -> Result<ExtractionResult, ExtractError> {
        let label = extraction_type.trim();
        if label.is_empty() {
            return Err(ExtractError::InvalidExtractionType);
        }

        let record = self.store.get(document_id).map_err(|e| match e {
            StoreError::NotFound(id) => ExtractError::NotFound(id),
            other => ExtractError::Store(other.to_string()),
        })?;

        if record.kind != RecordKind::Document {
            return Err(ExtractError::NotFound(document_id.to_string()));
        }

        let (fields, confidence) = match label.to_lowercase().as_str() {
            "summary" => (
                extractors::summary(&record.body, &self.config),
                extractors::SUMMARY_CONFIDENCE,
            ),
            "key_findings" => (
                extractors::key_findings(&record.body, &self.config),
                extractors::KEY_FINDINGS_CONFIDENCE,
            ),
            "recommendations" => (
                extractors::recommendations(&record.body, &self.config),
                extractors::RECOMMENDATIONS_CONFIDENCE,
            ),
            "entities" => (
                extractors::entities(&record.body, &self.config),
                extractors::ENTITIES_CONFIDENCE,
            ),
            other => {
                debug!(extraction_type = other, "no typed extractor, using generic");
                (
                    extractors::generic(&record.body),
                    extractors::GENERIC_CONFIDENCE,
                )
            }
        };

        debug!(
            document = %document_id,
            extraction_type = label,
            fields = fields.len(),
            "extraction complete"
        );

        Ok(ExtractionResult {
            source_record_id: record.id,
            extraction_type: label.to_string(),
            fields,
            confidence,
        })
    }
}
