//! Extract command implementation.

use super::Engine;
use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use dermkb_domain::RecordId;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let result = engine.extract(&RecordId::from(args.id), &args.extraction_type)?;
    println!("{}", formatter.format_extraction(&result)?);
    Ok(())
}
