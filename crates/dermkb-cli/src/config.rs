//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use dermkb_answer::{AnswerError, CannedGenerator, HttpAnswerGenerator};
use dermkb_domain::traits::{AnswerGenerator, GeneratedAnswer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// URL of a remote answer service; when absent, canned answers are used
    #[serde(default)]
    pub answer_endpoint: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default FAQ page size
    #[serde(default = "default_faq_limit")]
    pub faq_limit: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".dermkb").join("config.toml"))
    }

    /// Load configuration from the default path or create default.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific path or create default.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the answer backend this configuration selects.
    pub fn answer_backend(&self) -> AnswerBackend {
        match &self.answer_endpoint {
            Some(endpoint) => AnswerBackend::Http(HttpAnswerGenerator::new(endpoint.clone())),
            None => AnswerBackend::Canned(CannedGenerator::new()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            faq_limit: default_faq_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_faq_limit() -> usize {
    10
}

/// The answer generator selected by configuration
pub enum AnswerBackend {
    /// Deterministic canned responses (no network)
    Canned(CannedGenerator),

    /// Remote inference service
    Http(HttpAnswerGenerator),
}

impl AnswerGenerator for AnswerBackend {
    type Error = AnswerError;

    fn generate(
        &self,
        question: &str,
        category: &str,
    ) -> std::result::Result<GeneratedAnswer, AnswerError> {
        match self {
            AnswerBackend::Canned(generator) => generator.generate(question, category),
            AnswerBackend::Http(generator) => generator.generate(question, category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.faq_limit, 10);
        assert!(config.answer_endpoint.is_none());
        assert!(matches!(config.answer_backend(), AnswerBackend::Canned(_)));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.answer_endpoint.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "answer_endpoint = \"http://localhost:8600\"\n\n[settings]\ncolor = false\nformat = \"json\"\nfaq_limit = 5"
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.faq_limit, 5);
        assert!(matches!(config.settings.format, OutputFormat::Json));
        assert!(matches!(config.answer_backend(), AnswerBackend::Http(_)));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
    }
}
