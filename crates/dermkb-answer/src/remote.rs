//! Remote answer service over HTTP
//!
//! Posts a question to a configurable inference endpoint and maps its JSON
//! response into a `GeneratedAnswer`. The timeout and retry policy live
//! here, not in the engine core.

use crate::AnswerError;
use dermkb_domain::traits::{AnswerGenerator, GeneratedAnswer};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for answer requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP-backed answer provider
///
/// Sends `{question, category}` to `<endpoint>/v1/answer` and expects
/// `{answer, confidence, sources}` back.
pub struct HttpAnswerGenerator {
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the answer API
#[derive(Serialize)]
struct AnswerRequest<'a> {
    question: &'a str,
    category: &'a str,
}

/// Response from the answer API
#[derive(Deserialize)]
struct AnswerResponse {
    answer: String,
    confidence: f64,
    #[serde(default)]
    sources: Vec<String>,
}

impl HttpAnswerGenerator {
    /// Create a new HTTP answer provider for the given endpoint
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dermkb_answer::HttpAnswerGenerator;
    ///
    /// let provider = HttpAnswerGenerator::new("http://localhost:8600");
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("default reqwest client");

        Self {
            endpoint: endpoint.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Request an answer from the remote service
    ///
    /// # Errors
    ///
    /// Returns error if the service is unreachable after retries, answers
    /// with a non-success status, or sends a malformed body.
    pub async fn request(
        &self,
        question: &str,
        category: &str,
    ) -> Result<GeneratedAnswer, AnswerError> {
        let url = format!("{}/v1/answer", self.endpoint);
        let body = AnswerRequest { question, category };

        // Retry with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return match response.json::<AnswerResponse>().await {
                            Ok(parsed) => Ok(GeneratedAnswer {
                                answer: parsed.answer,
                                confidence: parsed.confidence,
                                sources: parsed.sources,
                            }),
                            Err(e) => Err(AnswerError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        };
                    }

                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    last_error = Some(AnswerError::Communication(format!(
                        "HTTP {}: {}",
                        status, error_text
                    )));
                }
                Err(e) => {
                    last_error = Some(AnswerError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| AnswerError::Communication("Max retries exceeded".to_string())))
    }
}

impl AnswerGenerator for HttpAnswerGenerator {
    type Error = AnswerError;

    fn generate(&self, question: &str, category: &str) -> Result<GeneratedAnswer, AnswerError> {
        // Blocking wrapper for the async request
        tokio::runtime::Runtime::new()
            .map_err(|e| AnswerError::Other(format!("Runtime error: {}", e)))?
            .block_on(self.request(question, category))
    }
}
