//! Category listing commands.

use super::Engine;
use crate::cli::CategoryArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the category command.
pub fn execute_category(args: CategoryArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let records = engine.by_category(&args.name)?;
    println!("{}", formatter.format_records(&records)?);
    Ok(())
}

/// Execute the categories command.
pub fn execute_categories(engine: &Engine, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_categories(&engine.categories())?);
    Ok(())
}
