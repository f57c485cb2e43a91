//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// DermKB CLI - Query and manage the dermatology knowledge base.
#[derive(Debug, Parser)]
#[command(name = "dermkb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the knowledge base
    Search(SearchArgs),

    /// List frequently asked questions
    Faq(FaqArgs),

    /// List all records in a category
    Category(CategoryArgs),

    /// Show a single record with related entries
    Show(ShowArgs),

    /// Ask a free-form question
    Ask(AskArgs),

    /// Extract structured fields from a document
    Extract(ExtractArgs),

    /// Ingest a plain-text document
    Ingest(IngestArgs),

    /// Delete an ingested document
    Delete(DeleteArgs),

    /// List all categories
    Categories,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query text
    pub query: String,

    /// Restrict results to a category
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the faq command.
#[derive(Debug, Parser)]
pub struct FaqArgs {
    /// Restrict to a category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Maximum number of entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the category command.
#[derive(Debug, Parser)]
pub struct CategoryArgs {
    /// Category name (case-insensitive)
    pub name: String,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Record ID
    pub id: String,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question to ask (at least ten characters)
    pub question: String,

    /// Category context for the question
    #[arg(short = 'C', long, default_value = "General")]
    pub category: String,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Document ID
    pub id: String,

    /// Extraction type (summary, key_findings, recommendations, entities)
    #[arg(short = 't', long = "type", default_value = "summary")]
    pub extraction_type: String,
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Path to a plain-text file
    pub file: String,

    /// Document title
    #[arg(short, long)]
    pub title: String,

    /// Category label
    #[arg(short = 'C', long)]
    pub category: String,

    /// Comma-separated tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Comma-separated source citations
    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<String>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Document ID
    pub id: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from(["dermkb", "search", "eczema triggers"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "eczema triggers");
                assert!(args.category.is_none());
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_with_category() {
        let cli = Cli::parse_from(["dermkb", "search", "treatment", "--category", "Acne"]);
        match cli.command {
            Command::Search(args) => assert_eq!(args.category.as_deref(), Some("Acne")),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_extract_defaults_to_summary() {
        let cli = Cli::parse_from(["dermkb", "extract", "doc-1"]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.id, "doc-1");
                assert_eq!(args.extraction_type, "summary");
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_ingest_tags_are_comma_separated() {
        let cli = Cli::parse_from([
            "dermkb",
            "ingest",
            "report.txt",
            "--title",
            "Biopsy report",
            "--category",
            "Reports",
            "--tags",
            "lesion,biopsy",
        ]);
        match cli.command {
            Command::Ingest(args) => assert_eq!(args.tags, vec!["lesion", "biopsy"]),
            _ => panic!("Expected Ingest command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["dermkb", "categories", "--format", "json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
