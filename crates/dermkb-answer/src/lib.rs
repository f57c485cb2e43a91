//! DermKB Answer Provider Layer
//!
//! Pluggable implementations of the `AnswerGenerator` trait from
//! `dermkb-domain`. The engine core stays deterministic; whatever latency
//! or randomness an answer source has belongs here.
//!
//! # Providers
//!
//! - `CannedGenerator`: deterministic canned responses for testing and
//!   offline operation
//! - `HttpAnswerGenerator`: remote inference service over HTTP
//!
//! # Examples
//!
//! ```
//! use dermkb_answer::CannedGenerator;
//! use dermkb_domain::traits::AnswerGenerator;
//!
//! let provider = CannedGenerator::default();
//! let answer = provider.generate("What helps with rosacea?", "Rosacea").unwrap();
//! assert!(!answer.answer.is_empty());
//! ```

#![warn(missing_docs)]

pub mod remote;

use dermkb_domain::traits::{AnswerGenerator, GeneratedAnswer};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use remote::HttpAnswerGenerator;

/// Errors that can occur during answer generation
#[derive(Error, Debug)]
pub enum AnswerError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the answer service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("Answer error: {0}")]
    Other(String),
}

/// Canned answer bank: answer text, confidence, sources
const CANNED_ANSWERS: [(&str, f64, &[&str]); 3] = [
    (
        "Based on current dermatological research, this condition typically responds well \
         to topical treatments combined with lifestyle modifications. I recommend consulting \
         with a dermatologist for a personalized treatment plan.",
        87.0,
        &["Dermatology journals", "Clinical guidelines"],
    ),
    (
        "This is a common concern in dermatology. The symptoms you're describing could be \
         related to several factors including environmental triggers, genetic predisposition, \
         or underlying skin barrier dysfunction. Proper diagnosis requires professional \
         evaluation.",
        92.0,
        &["Medical literature", "Expert consensus"],
    ),
    (
        "Treatment effectiveness varies among individuals, but most patients see improvement \
         within 4-8 weeks of consistent treatment. It's important to follow the prescribed \
         regimen and avoid common triggers during the healing process.",
        89.0,
        &["Clinical studies", "Patient outcomes data"],
    ),
];

/// Deterministic canned answer provider
///
/// Picks one of a fixed set of responses by hashing the question, so the
/// same question always gets the same answer without any network call.
/// Per-question overrides and call counting support testing.
///
/// # Examples
///
/// ```
/// use dermkb_answer::CannedGenerator;
/// use dermkb_domain::traits::AnswerGenerator;
///
/// let mut provider = CannedGenerator::default();
/// provider.add_override("what about tar soap?", "Tar soap can help with scaling.");
///
/// let answer = provider.generate("what about tar soap?", "Psoriasis").unwrap();
/// assert_eq!(answer.answer, "Tar soap can help with scaling.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CannedGenerator {
    overrides: Arc<Mutex<HashMap<String, GeneratedAnswer>>>,
    call_count: Arc<Mutex<usize>>,
}

impl CannedGenerator {
    /// Create a new canned generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a specific answer for a given question
    pub fn add_override(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let answer = GeneratedAnswer {
            answer: answer.into(),
            confidence: 95.0,
            sources: vec![],
        };
        self.overrides
            .lock()
            .unwrap()
            .insert(question.into(), answer);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn pick(question: &str) -> GeneratedAnswer {
        let mut hasher = DefaultHasher::new();
        question.hash(&mut hasher);
        let idx = (hasher.finish() as usize) % CANNED_ANSWERS.len();

        let (answer, confidence, sources) = CANNED_ANSWERS[idx];
        GeneratedAnswer {
            answer: answer.to_string(),
            confidence,
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AnswerGenerator for CannedGenerator {
    type Error = AnswerError;

    fn generate(&self, question: &str, _category: &str) -> Result<GeneratedAnswer, AnswerError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(answer) = self.overrides.lock().unwrap().get(question) {
            return Ok(answer.clone());
        }

        Ok(Self::pick(question))
    }
}
