//! Relation discovery: same-category or tag-overlapping records

use crate::SearchError;
use dermkb_domain::traits::{RecordFilter, RecordStore};
use dermkb_domain::{RecordId, RelationSummary};
use dermkb_store::MemoryStore;
use std::sync::Arc;

/// Finds records related to a given record by category or tag overlap
pub struct RelationFinder {
    store: Arc<MemoryStore>,
}

impl RelationFinder {
    /// Create a relation finder over the given store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Return up to `limit` records related to `id`
    ///
    /// A record is related when it shares the target's category or has at
    /// least one tag in common. The target itself is never included;
    /// candidates keep corpus insertion order (first found wins).
    ///
    /// # Errors
    ///
    /// `SearchError::NotFound` when `id` is absent from the store.
    pub fn related(
        &self,
        id: &RecordId,
        limit: usize,
    ) -> Result<Vec<RelationSummary>, SearchError> {
        let target = self
            .store
            .get(id)
            .map_err(|_| SearchError::NotFound(id.to_string()))?;

        let related = self
            .store
            .list(&RecordFilter::default())
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .filter(|candidate| {
                candidate.category == target.category
                    || candidate.tags.iter().any(|tag| target.tags.contains(tag))
            })
            .take(limit)
            .map(RelationSummary::from)
            .collect();

        Ok(related)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dermkb_domain::{KnowledgeRecord, DEFAULT_RELATED_LIMIT};

    fn tagged(id: &str, category: &str, tags: &[&str]) -> KnowledgeRecord {
        KnowledgeRecord::qa(
            RecordId::from(id),
            format!("question {}", id),
            format!("answer {}", id),
            category,
            tags.iter().map(|t| t.to_string()).collect(),
            90.0,
            vec![],
            0,
        )
    }

    fn store_with(records: Vec<KnowledgeRecord>) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for record in records {
            store.put(record).unwrap();
        }
        store
    }

    #[test]
    fn test_missing_target_fails() {
        let finder = RelationFinder::new(store_with(vec![]));
        let result = finder.related(&RecordId::from("1"), DEFAULT_RELATED_LIMIT);
        assert!(matches!(result, Err(SearchError::NotFound(_))));
    }

    #[test]
    fn test_never_includes_target() {
        let finder = RelationFinder::new(store_with(vec![
            tagged("1", "Eczema", &["triggers"]),
            tagged("2", "Eczema", &[]),
        ]));

        let related = finder.related(&RecordId::from("1"), DEFAULT_RELATED_LIMIT).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, RecordId::from("2"));
    }

    #[test]
    fn test_tag_overlap_relates_across_categories() {
        let finder = RelationFinder::new(store_with(vec![
            tagged("1", "Eczema", &["triggers", "flare-ups"]),
            tagged("2", "Rosacea", &["triggers"]),
            tagged("3", "Psoriasis", &["autoimmune"]),
        ]));

        let related = finder.related(&RecordId::from("1"), DEFAULT_RELATED_LIMIT).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, RecordId::from("2"));
    }

    #[test]
    fn test_first_found_wins_and_limit_truncates() {
        let finder = RelationFinder::new(store_with(vec![
            tagged("1", "Acne", &[]),
            tagged("2", "Acne", &[]),
            tagged("3", "Acne", &[]),
            tagged("4", "Acne", &[]),
            tagged("5", "Acne", &[]),
        ]));

        let related = finder.related(&RecordId::from("1"), 3).unwrap();
        let ids: Vec<String> = related.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let finder = RelationFinder::new(store_with(vec![
            tagged("1", "Eczema", &["triggers"]),
            tagged("2", "Eczema", &[]),
            tagged("3", "Acne", &["triggers"]),
        ]));

        let first = finder.related(&RecordId::from("1"), DEFAULT_RELATED_LIMIT).unwrap();
        let second = finder.related(&RecordId::from("1"), DEFAULT_RELATED_LIMIT).unwrap();
        assert_eq!(first, second);
    }
}
