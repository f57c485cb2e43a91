//! Result types for extraction

use dermkb_domain::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A structured field pulled from document text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single text value
    Text(String),

    /// An ordered list of values
    List(Vec<String>),
}

/// Result of applying one extraction type to one document
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Id of the document the fields were extracted from
    pub source_record_id: RecordId,

    /// Extraction type label, as requested (trimmed)
    pub extraction_type: String,

    /// Extracted fields, keyed by field name
    pub fields: BTreeMap<String, FieldValue>,

    /// Static per-extractor confidence in [0, 100]
    pub confidence: f64,
}
