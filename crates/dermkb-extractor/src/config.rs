//! Configuration for the extraction engine

use serde::{Deserialize, Serialize};

/// Configuration for the extraction engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Sentences included in a summary
    pub summary_sentences: usize,

    /// Maximum key findings returned
    pub max_findings: usize,

    /// Maximum recommendations returned
    pub max_recommendations: usize,

    /// Maximum entities returned
    pub max_entities: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.summary_sentences == 0 {
            return Err("summary_sentences must be greater than 0".to_string());
        }
        if self.max_findings == 0 {
            return Err("max_findings must be greater than 0".to_string());
        }
        if self.max_recommendations == 0 {
            return Err("max_recommendations must be greater than 0".to_string());
        }
        if self.max_entities == 0 {
            return Err("max_entities must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            summary_sentences: 3,
            max_findings: 5,
            max_recommendations: 5,
            max_entities: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = ExtractorConfig {
            summary_sentences: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractorConfig {
            max_entities: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
