//! Inverted term index over the record corpus
//!
//! Maps each normalized term to the set of record ids containing it in any
//! indexed field (title, body, tags). The index is owned by the store and
//! mutated only under the store's write lock, so an insert or removal is
//! always atomic with the corresponding record change.

use dermkb_domain::{tokenize, KnowledgeRecord, RecordId};
use std::collections::{BTreeSet, HashMap};

/// Exact-term inverted index: term -> set of record ids
///
/// No partial or fuzzy matching; queries are tokenized with the same rule
/// as records, so exact term lookup is sufficient.
#[derive(Debug, Default)]
pub struct TermIndex {
    terms: HashMap<String, BTreeSet<RecordId>>,
}

impl TermIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a record under every term of its title, body, and tags
    pub fn insert(&mut self, record: &KnowledgeRecord) {
        for term in Self::record_terms(record) {
            self.terms.entry(term).or_default().insert(record.id.clone());
        }
    }

    /// Remove a record id from every term entry it appears under
    ///
    /// Entries left empty are pruned to bound memory.
    pub fn remove(&mut self, id: &RecordId) {
        self.terms.retain(|_, ids| {
            ids.remove(id);
            !ids.is_empty()
        });
    }

    /// Exact-term lookup; unknown terms yield an empty set
    pub fn lookup(&self, term: &str) -> Vec<RecordId> {
        self.terms
            .get(term)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct terms currently indexed
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Check if the index holds no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn record_terms(record: &KnowledgeRecord) -> BTreeSet<String> {
        let mut terms: BTreeSet<String> = BTreeSet::new();
        terms.extend(tokenize(&record.title));
        terms.extend(tokenize(&record.body));
        for tag in &record.tags {
            terms.extend(tokenize(tag));
        }
        terms
    }
}
