//! DermKB Engine
//!
//! The facade over the storage, search, relation, and extraction layers.
//! Callers construct one `KnowledgeEngine` with an answer generator and go
//! through it for every operation; nothing below this crate is needed for
//! normal use.
//!
//! # Examples
//!
//! ```
//! use dermkb_engine::KnowledgeEngine;
//! use dermkb_answer::CannedGenerator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = KnowledgeEngine::with_seed(CannedGenerator::new())?;
//!
//! let response = engine.search("eczema", None)?;
//! assert_eq!(response.count, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

use dermkb_domain::traits::{AnswerGenerator, RecordFilter, RecordStore};
use dermkb_domain::{
    KnowledgeRecord, RecordId, RecordKind, RelationSummary, DEFAULT_RELATED_LIMIT,
};
use dermkb_extractor::{ExtractionEngine, ExtractionResult, ExtractorConfig};
use dermkb_search::{RelationFinder, SearchEngine, SearchError, SearchResponse};
use dermkb_store::{MemoryStore, StoreError};
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};

pub use dermkb_extractor::FieldValue;

/// Minimum question length accepted by `ask`
pub const MIN_QUESTION_LEN: usize = 10;

/// Confidence assigned to freshly ingested documents
const INGESTED_CONFIDENCE: f64 = 85.0;

/// Errors surfaced by the engine facade
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No records exist under the requested category
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The answer generator failed
    #[error("Answer generation failed: {0}")]
    Answer(String),

    /// Storage error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Search error
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Extraction error
    #[error(transparent)]
    Extract(#[from] dermkb_extractor::ExtractError),
}

/// Caller-supplied metadata accompanying an ingested document
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,

    /// Category label
    pub category: String,

    /// Tags for relation discovery
    pub tags: Vec<String>,

    /// Source citations
    pub sources: Vec<String>,
}

/// One page of frequently asked questions
#[derive(Debug, Clone)]
pub struct FaqPage {
    /// Q&A entries, highest confidence first
    pub faqs: Vec<KnowledgeRecord>,

    /// Distinct categories across the whole corpus
    pub categories: Vec<String>,
}

/// A record together with its related entries
#[derive(Debug, Clone)]
pub struct RecordWithRelations {
    /// The requested record
    pub record: KnowledgeRecord,

    /// Up to three related records
    pub related: Vec<RelationSummary>,
}

/// Response to an asked question
#[derive(Debug, Clone)]
pub struct AskResponse {
    /// Generated id for this exchange
    pub id: RecordId,

    /// The question as asked
    pub question: String,

    /// Category the question was asked under
    pub category: String,

    /// Generated answer text
    pub answer: String,

    /// Generator confidence in [0, 100]
    pub confidence: f64,

    /// Sources cited by the generator
    pub sources: Vec<String>,

    /// When the answer was produced (unix seconds)
    pub answered_at: u64,

    /// Titles of related Q&A entries from the corpus
    pub related_questions: Vec<String>,
}

/// The engine facade, generic over its answer generator
///
/// Cloneable components share one store behind an `Arc`; the generator is
/// owned so tests can swap in a canned one.
pub struct KnowledgeEngine<G: AnswerGenerator> {
    store: Arc<MemoryStore>,
    search: SearchEngine,
    relations: RelationFinder,
    extraction: ExtractionEngine,
    answers: G,
}

impl<G: AnswerGenerator> KnowledgeEngine<G>
where
    G::Error: fmt::Display,
{
    /// Create an engine over a store pre-populated with the reference corpus
    pub fn with_seed(answers: G) -> Result<Self, EngineError> {
        Ok(Self::over(Arc::new(MemoryStore::with_seed()?), answers))
    }

    /// Create an engine over an empty store
    pub fn empty(answers: G) -> Self {
        Self::over(Arc::new(MemoryStore::new()), answers)
    }

    fn over(store: Arc<MemoryStore>, answers: G) -> Self {
        Self {
            search: SearchEngine::new(Arc::clone(&store)),
            relations: RelationFinder::new(Arc::clone(&store)),
            extraction: ExtractionEngine::new(Arc::clone(&store), ExtractorConfig::default()),
            store,
            answers,
        }
    }

    /// Search the corpus for a free-text query
    ///
    /// # Errors
    ///
    /// `EngineError::Search` wrapping `InvalidQuery` for an empty query.
    pub fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<SearchResponse, EngineError> {
        Ok(self.search.search(query, category)?)
    }

    /// Q&A entries ordered by confidence, with the corpus category list
    ///
    /// Only Q&A reference entries appear; ingested documents do not. The
    /// category list always spans the whole corpus regardless of the filter.
    pub fn faq(&self, category: Option<&str>, limit: usize) -> FaqPage {
        let mut filter = RecordFilter::by_kind(RecordKind::Qa);
        filter.category = category.map(|c| c.to_string());

        let mut faqs = self.store.list(&filter);
        // Stable sort keeps corpus order within equal confidence
        faqs.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        faqs.truncate(limit);

        FaqPage {
            faqs,
            categories: self.store.categories(),
        }
    }

    /// Distinct categories across the corpus, in first-seen order
    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    /// All records under a category, in corpus insertion order
    ///
    /// # Errors
    ///
    /// `EngineError::CategoryNotFound` when no record carries the category.
    pub fn by_category(&self, category: &str) -> Result<Vec<KnowledgeRecord>, EngineError> {
        let records = self.store.list(&RecordFilter::by_category(category));
        if records.is_empty() {
            return Err(EngineError::CategoryNotFound(category.to_string()));
        }
        Ok(records)
    }

    /// A single record with up to three related entries
    ///
    /// # Errors
    ///
    /// `EngineError::Store` wrapping `NotFound` when `id` is absent.
    pub fn by_id(&self, id: &RecordId) -> Result<RecordWithRelations, EngineError> {
        let record = self.store.get(id)?;
        let related = self.relations.related(id, DEFAULT_RELATED_LIMIT)?;
        Ok(RecordWithRelations { record, related })
    }

    /// Ask a free-form question under a category
    ///
    /// The answer comes from the configured generator; related questions
    /// come from a corpus search over the question text.
    ///
    /// # Errors
    ///
    /// `EngineError::Validation` for questions shorter than ten characters
    /// (the generator is never called); `EngineError::Answer` when the
    /// generator fails.
    pub fn ask(&self, question: &str, category: &str) -> Result<AskResponse, EngineError> {
        let question = question.trim();
        if question.chars().count() < MIN_QUESTION_LEN {
            return Err(EngineError::Validation(format!(
                "Question must be at least {} characters",
                MIN_QUESTION_LEN
            )));
        }

        let generated = self
            .answers
            .generate(question, category)
            .map_err(|e| EngineError::Answer(e.to_string()))?;

        let related_questions = match self.search.search(question, None) {
            Ok(response) => response
                .results
                .into_iter()
                .filter(|r| r.record.kind == RecordKind::Qa)
                .take(DEFAULT_RELATED_LIMIT)
                .map(|r| r.record.title)
                .collect(),
            Err(_) => Vec::new(),
        };

        info!(category, "question answered");

        Ok(AskResponse {
            id: RecordId::new(),
            question: question.to_string(),
            category: category.to_string(),
            answer: generated.answer,
            confidence: generated.confidence,
            sources: generated.sources,
            answered_at: now_unix(),
            related_questions,
        })
    }

    /// Store an already-extracted document text as a new record
    ///
    /// Text extraction from binary formats happens before this call; the
    /// engine only ever sees plain text.
    ///
    /// # Errors
    ///
    /// `EngineError::Validation` for empty text or metadata that fails
    /// record validation.
    pub fn ingest_document(
        &self,
        text: &str,
        metadata: DocumentMetadata,
    ) -> Result<KnowledgeRecord, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::Validation(
                "Document text is empty".to_string(),
            ));
        }

        let record = KnowledgeRecord::document(
            RecordId::new(),
            metadata.title,
            text,
            metadata.category,
            metadata.tags,
            INGESTED_CONFIDENCE,
            metadata.sources,
            now_unix(),
        );

        let id = self.store.put(record.clone())?;
        debug!(id = %id, "document ingested");
        Ok(record)
    }

    /// Extract structured fields from a stored document
    pub fn extract(
        &self,
        document_id: &RecordId,
        extraction_type: &str,
    ) -> Result<ExtractionResult, EngineError> {
        Ok(self.extraction.extract(document_id, extraction_type)?)
    }

    /// Delete an ingested document
    ///
    /// # Errors
    ///
    /// `EngineError::Validation` when `id` names a Q&A reference entry;
    /// `EngineError::Store` wrapping `NotFound` when absent.
    pub fn delete_document(&self, id: &RecordId) -> Result<(), EngineError> {
        let record = self.store.get(id)?;
        if record.kind == RecordKind::Qa {
            return Err(EngineError::Validation(format!(
                "Record {} is reference data and cannot be deleted",
                id
            )));
        }
        self.store.delete(id)?;
        info!(id = %id, "document deleted");
        Ok(())
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
