//! Delete command implementation.

use super::Engine;
use crate::cli::DeleteArgs;
use crate::error::Result;
use crate::output::Formatter;
use dermkb_domain::RecordId;

/// Execute the delete command.
pub fn execute_delete(args: DeleteArgs, engine: &Engine, formatter: &Formatter) -> Result<()> {
    let id = RecordId::from(args.id);
    engine.delete_document(&id)?;
    println!("{}", formatter.success(&format!("Document deleted: {}", id)));
    Ok(())
}
