//! DermKB CLI - Command-line interface for the dermatology knowledge base.

use anyhow::Context;
use clap::Parser;
use dermkb_cli::commands;
use dermkb_cli::{Cli, Command, Config, Formatter};
use dermkb_engine::KnowledgeEngine;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path))?,
        None => Config::load().context("failed to load config")?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let engine = KnowledgeEngine::with_seed(config.answer_backend())
        .context("failed to initialize knowledge base")?;

    match cli.command {
        Command::Search(args) => commands::execute_search(args, &engine, &formatter)?,
        Command::Faq(args) => {
            commands::execute_faq(args, config.settings.faq_limit, &engine, &formatter)?
        }
        Command::Category(args) => commands::execute_category(args, &engine, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &engine, &formatter)?,
        Command::Ask(args) => commands::execute_ask(args, &engine, &formatter)?,
        Command::Extract(args) => commands::execute_extract(args, &engine, &formatter)?,
        Command::Ingest(args) => commands::execute_ingest(args, &engine, &formatter)?,
        Command::Delete(args) => commands::execute_delete(args, &engine, &formatter)?,
        Command::Categories => commands::execute_categories(&engine, &formatter)?,
    }

    Ok(())
}
