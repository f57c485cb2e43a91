//! Ask command implementation.

use super::Engine;
use crate::cli::AskArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the ask command.
pub fn execute_ask(args: AskArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let response = engine.ask(&args.question, &args.category)?;
    println!("{}", formatter.format_ask(&response)?);
    Ok(())
}
