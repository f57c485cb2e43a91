//! Embedded seed corpus
//!
//! The reference Q&A entries ship inside the binary so a store can be
//! seeded without touching the filesystem. Documents are only ever added
//! at runtime through ingestion.

use crate::StoreError;
use dermkb_domain::{KnowledgeRecord, RecordId};
use serde::Deserialize;

/// On-disk shape of a seed entry
///
/// Kept separate from the domain type so the domain crate stays free of
/// serde; conversion happens here.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: String,
    kind: String,
    title: String,
    body: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    confidence: f64,
    #[serde(default)]
    sources: Vec<String>,
    created_at: u64,
}

impl SeedRecord {
    fn into_record(self) -> Result<KnowledgeRecord, StoreError> {
        let record = match self.kind.as_str() {
            "qa" => KnowledgeRecord::qa(
                RecordId::from(self.id),
                self.title,
                self.body,
                self.category,
                self.tags,
                self.confidence,
                self.sources,
                self.created_at,
            ),
            "document" => KnowledgeRecord::document(
                RecordId::from(self.id),
                self.title,
                self.body,
                self.category,
                self.tags,
                self.confidence,
                self.sources,
                self.created_at,
            ),
            other => {
                return Err(StoreError::Seed(format!("unknown record kind: {}", other)));
            }
        };
        Ok(record)
    }
}

/// Load the embedded reference corpus
pub fn seed_corpus() -> Result<Vec<KnowledgeRecord>, StoreError> {
    let raw = include_str!("seed.json");
    let entries: Vec<SeedRecord> =
        serde_json::from_str(raw).map_err(|e| StoreError::Seed(e.to_string()))?;

    entries.into_iter().map(SeedRecord::into_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dermkb_domain::RecordKind;

    #[test]
    fn test_seed_corpus_loads() {
        let records = seed_corpus().unwrap();
        assert_eq!(records.len(), 3);

        // Corpus order is the reference order
        assert_eq!(records[0].id, RecordId::from("1"));
        assert_eq!(records[1].id, RecordId::from("2"));
        assert_eq!(records[2].id, RecordId::from("3"));
    }

    #[test]
    fn test_seed_records_are_valid_qa() {
        for record in seed_corpus().unwrap() {
            assert_eq!(record.kind, RecordKind::Qa);
            assert!(record.validate().is_ok(), "seed record {} invalid", record.id);
        }
    }

    #[test]
    fn test_seed_categories() {
        let categories: Vec<String> = seed_corpus()
            .unwrap()
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, vec!["Eczema", "Acne", "Psoriasis"]);
    }
}
