//! Relation module - lightweight references between corpus records
//!
//! A relation is a same-category or tag-overlapping record surfaced as
//! "related" to a given record. Relations are derived on demand and never
//! stored.

use crate::record::{KnowledgeRecord, RecordId};

/// Default number of related records surfaced alongside a lookup
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// A compact summary of a related record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSummary {
    /// Id of the related record
    pub id: RecordId,

    /// Question or document title of the related record
    pub title: String,

    /// Category of the related record
    pub category: String,
}

impl From<&KnowledgeRecord> for RelationSummary {
    fn from(record: &KnowledgeRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{KnowledgeRecord, RecordId};

    #[test]
    fn test_summary_from_record() {
        let record = KnowledgeRecord::qa(
            RecordId::from("1"),
            "Is psoriasis contagious?",
            "No, psoriasis is not contagious.",
            "Psoriasis",
            vec!["contagious".to_string()],
            98.0,
            vec![],
            0,
        );

        let summary = RelationSummary::from(&record);
        assert_eq!(summary.id, RecordId::from("1"));
        assert_eq!(summary.title, "Is psoriasis contagious?");
        assert_eq!(summary.category, "Psoriasis");
    }
}
