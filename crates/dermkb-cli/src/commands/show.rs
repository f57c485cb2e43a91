//! Show command implementation.

use super::Engine;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use dermkb_domain::RecordId;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let found = engine.by_id(&RecordId::from(args.id))?;
    println!("{}", formatter.format_record_with_relations(&found)?);
    Ok(())
}
