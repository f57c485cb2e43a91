//! Query engine: candidate gathering, scoring, and ranking

use crate::SearchError;
use dermkb_domain::traits::{RecordFilter, RecordStore};
use dermkb_domain::{tokenize, KnowledgeRecord, RecordId};
use dermkb_store::MemoryStore;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Score weight for a primary-field (question/title) match
const TITLE_WEIGHT: f64 = 2.0;

/// Score weight for a secondary-field (answer/body) match
const BODY_WEIGHT: f64 = 1.0;

/// A single ranked match
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The matched record
    pub record: KnowledgeRecord,

    /// Relevance score (title matches outweigh body matches)
    pub score: f64,

    /// Which fields matched: "title", "body", "tags"
    pub matched_fields: BTreeSet<String>,
}

/// Ranked results for one query
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Matches in descending score order; ties keep corpus insertion order
    pub results: Vec<SearchResult>,

    /// Number of matches
    pub count: usize,
}

/// Relevance-ranked search over the shared store
pub struct SearchEngine {
    store: Arc<MemoryStore>,
}

impl SearchEngine {
    /// Create a search engine over the given store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Search the corpus for a free-text query
    ///
    /// A record is eligible when any query term hits the index for it, or
    /// when the whole lowercased query appears as a substring of its title,
    /// body, or a tag. When `category` is given, candidates are filtered to
    /// a case-insensitive exact category match before scoring.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidQuery` for an empty or whitespace-only query.
    pub fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let needle = trimmed.to_lowercase();
        let terms = tokenize(trimmed);

        // Union of index lookups over query terms: the fast path
        let mut indexed: BTreeSet<RecordId> = BTreeSet::new();
        for term in &terms {
            indexed.extend(self.store.lookup(term));
        }

        let mut results = Vec::new();
        for record in self.store.list(&RecordFilter::default()) {
            if let Some(category) = category {
                if !record.category.eq_ignore_ascii_case(category) {
                    continue;
                }
            }

            // Substring fallback keeps free-text "contains" parity for
            // queries whose terms the index cannot see (e.g. one-letter
            // fragments inside words)
            if !indexed.contains(&record.id) && !contains_needle(&record, &needle) {
                continue;
            }

            let matched = match_fields(&record, &terms, &needle);
            if matched.fields.is_empty() {
                continue;
            }

            results.push(SearchResult {
                record,
                score: matched.score,
                matched_fields: matched.fields,
            });
        }

        // Stable sort: equal scores keep corpus insertion order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(query = trimmed, matches = results.len(), "search complete");

        let count = results.len();
        Ok(SearchResponse { results, count })
    }
}

struct FieldMatches {
    score: f64,
    fields: BTreeSet<String>,
}

/// Score a candidate: title and body matches score, tag matches only make
/// the record eligible and are reported
fn match_fields(record: &KnowledgeRecord, terms: &[String], needle: &str) -> FieldMatches {
    let mut fields = BTreeSet::new();
    let mut score = 0.0;

    if text_matches(&record.title, terms, needle) {
        fields.insert("title".to_string());
        score += TITLE_WEIGHT;
    }
    if text_matches(&record.body, terms, needle) {
        fields.insert("body".to_string());
        score += BODY_WEIGHT;
    }
    if record
        .tags
        .iter()
        .any(|tag| text_matches(tag, terms, needle))
    {
        fields.insert("tags".to_string());
    }

    FieldMatches { score, fields }
}

/// Term-set intersection or whole-query substring containment
fn text_matches(text: &str, terms: &[String], needle: &str) -> bool {
    let lowered = text.to_lowercase();
    if lowered.contains(needle) {
        return true;
    }
    let text_terms: BTreeSet<String> = tokenize(text).into_iter().collect();
    terms.iter().any(|term| text_terms.contains(term))
}

fn contains_needle(record: &KnowledgeRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.body.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
