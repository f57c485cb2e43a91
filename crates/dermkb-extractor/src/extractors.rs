//! Typed field extractors
//!
//! Each extractor is a pure function of document text. Confidence values
//! are static per extractor; swapping in genuine analysis later only has
//! to honor the same signatures.

use crate::config::ExtractorConfig;
use crate::types::FieldValue;
use std::collections::BTreeMap;

/// Confidence reported by the summary extractor
pub const SUMMARY_CONFIDENCE: f64 = 88.0;

/// Confidence reported by the key-findings extractor
pub const KEY_FINDINGS_CONFIDENCE: f64 = 85.0;

/// Confidence reported by the recommendations extractor
pub const RECOMMENDATIONS_CONFIDENCE: f64 = 90.0;

/// Confidence reported by the entities extractor
pub const ENTITIES_CONFIDENCE: f64 = 82.0;

/// Confidence reported by the generic fallback extractor
pub const GENERIC_CONFIDENCE: f64 = 75.0;

/// Sentences flagged as findings contain one of these markers
const FINDING_MARKERS: [&str; 8] = [
    "found", "shows", "show", "indicates", "suggests", "observed", "diagnos", "evidence",
];

/// Sentences flagged as recommendations contain one of these markers
const RECOMMENDATION_MARKERS: [&str; 7] = [
    "recommend", "should", "advise", "avoid", "consult", "apply", "follow up",
];

pub(crate) type Fields = BTreeMap<String, FieldValue>;

/// Leading sentences of the document
pub fn summary(text: &str, config: &ExtractorConfig) -> Fields {
    let leading: Vec<String> = sentences(text)
        .into_iter()
        .take(config.summary_sentences)
        .collect();

    let mut fields = Fields::new();
    fields.insert(
        "summary".to_string(),
        FieldValue::Text(leading.join(". ")),
    );
    fields
}

/// Sentences carrying finding language
///
/// Falls back to the first sentence when no marker matches, so the field
/// is never empty for non-empty text.
pub fn key_findings(text: &str, config: &ExtractorConfig) -> Fields {
    let matched = marked_sentences(text, &FINDING_MARKERS, config.max_findings);

    let mut fields = Fields::new();
    fields.insert("key_findings".to_string(), FieldValue::List(matched));
    fields
}

/// Sentences carrying advice language
pub fn recommendations(text: &str, config: &ExtractorConfig) -> Fields {
    let matched = marked_sentences(text, &RECOMMENDATION_MARKERS, config.max_recommendations);

    let mut fields = Fields::new();
    fields.insert("recommendations".to_string(), FieldValue::List(matched));
    fields
}

/// Capitalized terms, deduplicated in order of first appearance
pub fn entities(text: &str, config: &ExtractorConfig) -> Fields {
    let mut seen: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        let cleaned: String = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string();
        if cleaned.chars().count() < 3 {
            continue;
        }
        let starts_upper = cleaned
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false);
        if !starts_upper {
            continue;
        }
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(&cleaned)) {
            seen.push(cleaned);
        }
        if seen.len() == config.max_entities {
            break;
        }
    }

    let mut fields = Fields::new();
    fields.insert("entities".to_string(), FieldValue::List(seen));
    fields
}

/// Fallback for unrecognized extraction types: the whole text,
/// whitespace-normalized, under a single field
pub fn generic(text: &str) -> Fields {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut fields = Fields::new();
    fields.insert("text".to_string(), FieldValue::Text(normalized));
    fields
}

fn sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn marked_sentences(text: &str, markers: &[&str], limit: usize) -> Vec<String> {
    let all = sentences(text);
    let mut matched: Vec<String> = all
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            markers.iter().any(|marker| lowered.contains(marker))
        })
        .take(limit)
        .cloned()
        .collect();

    if matched.is_empty() {
        matched.extend(all.into_iter().take(1));
    }
    matched
}
