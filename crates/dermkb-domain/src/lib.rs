//! DermKB Domain Layer
//!
//! This crate contains the core data model for the DermKB knowledge engine.
//! It carries almost no external dependencies (uuid only, for generated
//! record identifiers) and defines the fundamental types and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **KnowledgeRecord**: a stored Q&A entry or document with category/tag
//!   metadata. Immutable once created.
//! - **Tokenizer**: the single normalization rule shared by index build and
//!   query time.
//! - **RelationSummary**: a lightweight reference to a related record.
//! - **Trait seams**: `RecordStore` for storage backends, `AnswerGenerator`
//!   for the pluggable answer collaborator.
//!
//! ## Architecture
//!
//! Pure business types only; storage, search, extraction, and answer
//! generation live in the other workspace crates behind the traits defined
//! here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod relation;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use record::{KnowledgeRecord, RecordId, RecordKind};
pub use relation::{RelationSummary, DEFAULT_RELATED_LIMIT};
pub use text::tokenize;
pub use traits::{AnswerGenerator, GeneratedAnswer, RecordFilter, RecordStore};
