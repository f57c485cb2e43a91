//! Search command implementation.

use super::Engine;
use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let response = engine.search(&args.query, args.category.as_deref())?;
    println!("{}", formatter.format_search(&response)?);
    Ok(())
}
