//! Knowledge record module - the fundamental unit of the DermKB corpus

use std::fmt;

/// Unique identifier for a knowledge record
///
/// Seed corpus entries carry short literal ids ("1", "2", ...); records
/// created at ingestion time get a generated UUIDv7 string, which keeps
/// generated ids chronologically sortable without coordination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    ///
    /// # Examples
    ///
    /// ```
    /// use dermkb_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The kind of a knowledge record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Short-form question/answer reference entry
    Qa,

    /// Long-form document ingested via upload
    Document,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Qa => write!(f, "qa"),
            RecordKind::Document => write!(f, "document"),
        }
    }
}

/// A knowledge record - a Q&A entry or a document in the corpus
///
/// Records are immutable once created; replacing a record means putting a
/// new record under the same id. For `Qa` records `title` holds the
/// question and `body` the answer; for `Document` records `title` is the
/// document title and `body` its extracted plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Record kind (Q&A entry or document)
    pub kind: RecordKind,

    /// Primary text field: question (Qa) or document title (Document)
    pub title: String,

    /// Secondary text field: answer (Qa) or extracted body text (Document)
    pub body: String,

    /// Category label (e.g. "Eczema", "Psoriasis")
    pub category: String,

    /// Distinct tags for relation discovery
    pub tags: Vec<String>,

    /// Confidence score in [0, 100]
    pub confidence: f64,

    /// Ordered source citations
    pub sources: Vec<String>,

    /// When this record was created (unix seconds)
    pub created_at: u64,
}

impl KnowledgeRecord {
    /// Create a Q&A record
    #[allow(clippy::too_many_arguments)]
    pub fn qa(
        id: RecordId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
        confidence: f64,
        sources: Vec<String>,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            kind: RecordKind::Qa,
            title: question.into(),
            body: answer.into(),
            category: category.into(),
            tags,
            confidence,
            sources,
            created_at,
        }
    }

    /// Create a document record
    #[allow(clippy::too_many_arguments)]
    pub fn document(
        id: RecordId,
        title: impl Into<String>,
        body: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
        confidence: f64,
        sources: Vec<String>,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            kind: RecordKind::Document,
            title: title.into(),
            body: body.into(),
            category: category.into(),
            tags,
            confidence,
            sources,
            created_at,
        }
    }

    /// Validate that the record has all required fields
    ///
    /// Required: non-empty id and category, at least one non-empty text
    /// field, confidence within [0, 100].
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("id is empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category is empty".to_string());
        }
        if self.title.trim().is_empty() && self.body.trim().is_empty() {
            return Err("record has no text fields".to_string());
        }
        if !(0.0..=100.0).contains(&self.confidence) {
            return Err(format!(
                "confidence {} out of range [0, 100]",
                self.confidence
            ));
        }
        Ok(())
    }
}
