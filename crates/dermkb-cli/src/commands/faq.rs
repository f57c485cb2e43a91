//! FAQ command implementation.

use super::Engine;
use crate::cli::FaqArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the faq command.
pub fn execute_faq(
    args: FaqArgs,
    default_limit: usize,
    engine: &Engine,
    formatter: &Formatter,
) -> Result<()> {
    let limit = args.limit.unwrap_or(default_limit);
    let page = engine.faq(args.category.as_deref(), limit);
    println!("{}", formatter.format_faq(&page)?);
    Ok(())
}
