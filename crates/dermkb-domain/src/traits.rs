//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::record::{KnowledgeRecord, RecordId, RecordKind};

/// Trait for storing and retrieving knowledge records
///
/// Implemented by the storage layer (dermkb-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Insert or replace a record by id
    ///
    /// Validation failures and index updates are the implementation's
    /// responsibility; the store and its index must never be observably
    /// inconsistent to a subsequent read.
    fn put(&self, record: KnowledgeRecord) -> Result<RecordId, Self::Error>;

    /// Get a record by id; fails when absent
    fn get(&self, id: &RecordId) -> Result<KnowledgeRecord, Self::Error>;

    /// Delete a record by id; fails when absent (not idempotent)
    fn delete(&self, id: &RecordId) -> Result<(), Self::Error>;

    /// List records matching the filter, in insertion order
    fn list(&self, filter: &RecordFilter) -> Vec<KnowledgeRecord>;
}

/// Filter criteria for listing records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Filter by record kind
    pub kind: Option<RecordKind>,

    /// Filter by category (case-insensitive exact match)
    pub category: Option<String>,
}

impl RecordFilter {
    /// Filter matching only records of the given kind
    pub fn by_kind(kind: RecordKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Filter matching only records in the given category
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// Whether a record passes this filter
    pub fn matches(&self, record: &KnowledgeRecord) -> bool {
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !record.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        true
    }
}

/// An answer produced by the pluggable answer collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAnswer {
    /// Answer text
    pub answer: String,

    /// Confidence score in [0, 100]
    pub confidence: f64,

    /// Ordered source citations
    pub sources: Vec<String>,
}

/// Trait for the answer-generation collaborator
///
/// The engine treats answer generation as an external, replaceable
/// dependency: a canned responder today, a real model later. Implementations
/// own their latency and timeout policy; the engine itself never retries.
pub trait AnswerGenerator {
    /// Error type for generation operations
    type Error;

    /// Generate an answer for a free-text question in a category
    fn generate(&self, question: &str, category: &str) -> Result<GeneratedAnswer, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{KnowledgeRecord, RecordId};

    fn qa(category: &str) -> KnowledgeRecord {
        KnowledgeRecord::qa(
            RecordId::new(),
            "question",
            "answer",
            category,
            vec![],
            90.0,
            vec![],
            0,
        )
    }

    #[test]
    fn test_default_filter_matches_all() {
        let filter = RecordFilter::default();
        assert!(filter.matches(&qa("Eczema")));
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let filter = RecordFilter::by_category("eczema");
        assert!(filter.matches(&qa("Eczema")));
        assert!(!filter.matches(&qa("Psoriasis")));
    }

    #[test]
    fn test_kind_filter() {
        let filter = RecordFilter::by_kind(RecordKind::Document);
        assert!(!filter.matches(&qa("Eczema")));
    }
}
