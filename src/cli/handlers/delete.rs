//! Delete command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_notebook;
use super::resolve::require_note;
use crate::cli::DeleteArgs;

pub fn handle_delete(args: &DeleteArgs, data_dir: &Path) -> Result<()> {
    let mut notebook = open_notebook(data_dir);
    let id = require_note(notebook.store().notes(), &args.note)?;

    let removed = notebook
        .delete(&id)
        .with_context(|| format!("failed to delete note in {}", data_dir.display()))?
        .with_context(|| format!("note not found: {}", id))?;

    println!("Deleted: {} [{}]", removed.title(), removed.id().prefix());
    Ok(())
}
