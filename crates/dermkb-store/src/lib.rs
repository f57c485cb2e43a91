//! DermKB Storage Layer
//!
//! Implements the `RecordStore` trait with an in-memory corpus guarded by a
//! readers-writer lock, plus the inverted term index the query engine
//! searches against.
//!
//! # Architecture
//!
//! - One `RwLock` over records and index together: unbounded concurrent
//!   reads, and a `put`/`delete` holds exclusive access only for the
//!   duration of the paired store + index update, so the two structures are
//!   never observably inconsistent.
//! - Records keep insertion order; replace-by-id keeps the original
//!   position so stable tie-breaking downstream survives replacement.
//!
//! # Examples
//!
//! ```
//! use dermkb_store::MemoryStore;
//! use dermkb_domain::traits::RecordStore;
//!
//! let store = MemoryStore::with_seed().unwrap();
//! assert_eq!(store.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod index;
mod seed;

use dermkb_domain::traits::{RecordFilter, RecordStore};
use dermkb_domain::{KnowledgeRecord, RecordId};
use index::TermIndex;
use std::sync::RwLock;
use thiserror::Error;
use tracing::debug;

pub use seed::seed_corpus;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Record failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Seed corpus could not be loaded
    #[error("Seed corpus error: {0}")]
    Seed(String),
}

/// In-memory implementation of `RecordStore`
///
/// # Thread Safety
///
/// All methods take `&self`; interior locking allows the store to be shared
/// across request handlers behind an `Arc`.
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    records: Vec<KnowledgeRecord>,
    index: TermIndex,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Create a store pre-populated with the reference Q&A corpus
    pub fn with_seed() -> Result<Self, StoreError> {
        let store = Self::new();
        for record in seed::seed_corpus()? {
            store.put(record)?;
        }
        Ok(store)
    }

    /// Exact-term index lookup; unknown terms yield an empty set
    pub fn lookup(&self, term: &str) -> Vec<RecordId> {
        self.inner.read().unwrap().index.lookup(term)
    }

    /// Distinct categories across the corpus, in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        let mut seen: Vec<String> = Vec::new();
        for record in &inner.records {
            if !seen.iter().any(|c| c == &record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    type Error = StoreError;

    fn put(&self, record: KnowledgeRecord) -> Result<RecordId, StoreError> {
        record.validate().map_err(StoreError::Validation)?;

        let mut inner = self.inner.write().unwrap();
        let id = record.id.clone();

        match inner.records.iter().position(|r| r.id == id) {
            Some(pos) => {
                // Replace by id, keeping corpus position; reindex the new
                // terms after dropping the old ones
                inner.index.remove(&id);
                inner.index.insert(&record);
                inner.records[pos] = record;
                debug!(id = %id, "replaced record");
            }
            None => {
                inner.index.insert(&record);
                inner.records.push(record);
                debug!(id = %id, "inserted record");
            }
        }

        Ok(id)
    }

    fn get(&self, id: &RecordId) -> Result<KnowledgeRecord, StoreError> {
        self.inner
            .read()
            .unwrap()
            .records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();

        let pos = inner
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        inner.records.remove(pos);
        inner.index.remove(id);
        debug!(id = %id, "deleted record");
        Ok(())
    }

    fn list(&self, filter: &RecordFilter) -> Vec<KnowledgeRecord> {
        self.inner
            .read()
            .unwrap()
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dermkb_domain::RecordKind;

    fn qa(id: &str, question: &str, answer: &str) -> KnowledgeRecord {
        KnowledgeRecord::qa(
            RecordId::from(id),
            question,
            answer,
            "Eczema",
            vec![],
            90.0,
            vec![],
            0,
        )
    }

    #[test]
    fn test_put_rejects_invalid_record() {
        let store = MemoryStore::new();
        let mut record = qa("1", "question", "answer");
        record.category = String::new();

        let result = store.put(record);
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_keeps_position_and_reindexes() {
        let store = MemoryStore::new();
        store.put(qa("1", "first entry about eczema", "old answer")).unwrap();
        store.put(qa("2", "second entry", "another answer")).unwrap();

        store.put(qa("1", "rewritten entry about dermatitis", "new answer")).unwrap();

        let records = store.list(&RecordFilter::default());
        assert_eq!(records[0].id, RecordId::from("1"));
        assert_eq!(records[0].title, "rewritten entry about dermatitis");

        // Old terms gone, new terms present
        assert!(store.lookup("eczema").is_empty());
        assert_eq!(store.lookup("dermatitis"), vec![RecordId::from("1")]);
    }

    #[test]
    fn test_delete_of_missing_is_an_error() {
        let store = MemoryStore::new();
        let result = store.delete(&RecordId::from("nope"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let store = MemoryStore::new();
        let mut a = qa("1", "q1", "a1");
        a.category = "Psoriasis".to_string();
        let mut b = qa("2", "q2", "a2");
        b.category = "Acne".to_string();
        let mut c = qa("3", "q3", "a3");
        c.category = "Psoriasis".to_string();
        store.put(a).unwrap();
        store.put(b).unwrap();
        store.put(c).unwrap();

        assert_eq!(store.categories(), vec!["Psoriasis", "Acne"]);
    }

    #[test]
    fn test_list_by_kind() {
        let store = MemoryStore::with_seed().unwrap();
        store
            .put(KnowledgeRecord::document(
                RecordId::from("doc-1"),
                "Biopsy report",
                "The biopsy shows benign tissue.",
                "Reports",
                vec![],
                90.0,
                vec![],
                0,
            ))
            .unwrap();

        let docs = store.list(&RecordFilter::by_kind(RecordKind::Document));
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, RecordId::from("doc-1"));

        let qas = store.list(&RecordFilter::by_kind(RecordKind::Qa));
        assert_eq!(qas.len(), 3);
    }
}
