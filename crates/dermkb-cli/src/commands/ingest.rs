//! Ingest command implementation.

use super::Engine;
use crate::cli::IngestArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use dermkb_engine::DocumentMetadata;
use std::fs;

/// Execute the ingest command.
///
/// Reads the file as UTF-8 plain text; extraction from binary formats
/// (PDF, DOCX) happens outside this tool.
pub fn execute_ingest(args: IngestArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .map_err(|e| CliError::InvalidInput(format!("Cannot read {}: {}", args.file, e)))?;

    let record = engine.ingest_document(
        &text,
        DocumentMetadata {
            title: args.title,
            category: args.category,
            tags: args.tags,
            sources: args.sources,
        },
    )?;

    println!("{}", formatter.success(&format!("Document ingested: {}", record.id)));
    Ok(())
}
