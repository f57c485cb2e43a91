//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use dermkb_domain::KnowledgeRecord;
use dermkb_engine::{AskResponse, FaqPage, RecordWithRelations};
use dermkb_extractor::{ExtractionResult, FieldValue};
use dermkb_search::SearchResponse;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest body excerpt shown in table cells
const EXCERPT_LEN: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of records.
    pub fn format_records(&self, records: &[KnowledgeRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.records_table(records)),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format ranked search results.
    pub fn format_search(&self, response: &SearchResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = response
                    .results
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "record": record_json(&r.record),
                            "score": r.score,
                            "matched_fields": r.matched_fields,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "results": values,
                    "count": response.count,
                }))?)
            }
            OutputFormat::Table => {
                if response.results.is_empty() {
                    return Ok(self.colorize("No matches found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Score", "ID", "Title", "Category", "Matched"]);
                for result in &response.results {
                    let matched: Vec<&str> =
                        result.matched_fields.iter().map(String::as_str).collect();
                    builder.push_record([
                        format!("{:.1}", result.score),
                        result.record.id.to_string(),
                        excerpt(&result.record.title),
                        result.record.category.clone(),
                        matched.join(", "),
                    ]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(response
                .results
                .iter()
                .map(|r| r.record.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format an FAQ page.
    pub fn format_faq(&self, page: &FaqPage) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let faqs: Vec<serde_json::Value> = page.faqs.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "faqs": faqs,
                    "categories": page.categories,
                }))?)
            }
            OutputFormat::Table => {
                let mut output = self.format_records(&page.faqs)?;
                output.push_str(&format!("\nCategories: {}", page.categories.join(", ")));
                Ok(output)
            }
            OutputFormat::Quiet => self.format_records(&page.faqs),
        }
    }

    /// Format a record with its related entries.
    pub fn format_record_with_relations(&self, found: &RecordWithRelations) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let related: Vec<serde_json::Value> = found
                    .related
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "id": r.id.to_string(),
                            "title": r.title,
                            "category": r.category,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "record": record_json(&found.record),
                    "related": related,
                }))?)
            }
            OutputFormat::Table => {
                let record = &found.record;
                let mut output = format!(
                    "{}\n{}\n\nCategory: {}  Confidence: {:.0}\nTags: {}\nSources: {}",
                    self.colorize(&record.title, "cyan"),
                    record.body,
                    record.category,
                    record.confidence,
                    record.tags.join(", "),
                    record.sources.join(", "),
                );
                if !found.related.is_empty() {
                    output.push_str("\n\nRelated:");
                    for related in &found.related {
                        output.push_str(&format!(
                            "\n  {} [{}] ({})",
                            related.title, related.category, related.id
                        ));
                    }
                }
                Ok(output)
            }
            OutputFormat::Quiet => Ok(found.record.id.to_string()),
        }
    }

    /// Format an answered question.
    pub fn format_ask(&self, response: &AskResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": response.id.to_string(),
                "question": response.question,
                "category": response.category,
                "answer": response.answer,
                "confidence": response.confidence,
                "sources": response.sources,
                "answered_at": response.answered_at,
                "related_questions": response.related_questions,
            }))?),
            OutputFormat::Table => {
                let mut output = format!(
                    "{}\n\nConfidence: {:.0}\nSources: {}",
                    response.answer,
                    response.confidence,
                    response.sources.join(", "),
                );
                if !response.related_questions.is_empty() {
                    output.push_str("\n\nRelated questions:");
                    for question in &response.related_questions {
                        output.push_str(&format!("\n  {}", question));
                    }
                }
                Ok(output)
            }
            OutputFormat::Quiet => Ok(response.id.to_string()),
        }
    }

    /// Format an extraction result.
    pub fn format_extraction(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "source_record_id": result.source_record_id.to_string(),
                    "extraction_type": result.extraction_type,
                    "fields": result.fields,
                    "confidence": result.confidence,
                }))?)
            }
            OutputFormat::Table => {
                let mut output = format!(
                    "Extraction: {} (confidence {:.0})",
                    result.extraction_type, result.confidence
                );
                for (name, value) in &result.fields {
                    match value {
                        FieldValue::Text(text) => {
                            output.push_str(&format!("\n\n{}:\n  {}", name, text));
                        }
                        FieldValue::List(items) => {
                            output.push_str(&format!("\n\n{}:", name));
                            for item in items {
                                output.push_str(&format!("\n  - {}", item));
                            }
                        }
                    }
                }
                Ok(output)
            }
            OutputFormat::Quiet => Ok(result.source_record_id.to_string()),
        }
    }

    /// Format a category list.
    pub fn format_categories(&self, categories: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&categories)?),
            _ => Ok(categories.join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    fn records_table(&self, records: &[KnowledgeRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Title", "Category", "Confidence"]);
        for record in records {
            builder.push_record([
                record.id.to_string(),
                record.kind.to_string(),
                excerpt(&record.title),
                record.category.clone(),
                format!("{:.0}", record.confidence),
            ]);
        }
        styled(builder)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_LEN).collect();
    format!("{}…", cut)
}

fn record_json(record: &KnowledgeRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id.to_string(),
        "kind": record.kind.to_string(),
        "title": record.title,
        "body": record.body,
        "category": record.category,
        "tags": record.tags,
        "confidence": record.confidence,
        "sources": record.sources,
        "created_at": record.created_at,
    })
}
