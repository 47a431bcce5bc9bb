//! Pin command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_notebook;
use super::resolve::require_note;
use crate::cli::PinArgs;

pub fn handle_pin(args: &PinArgs, data_dir: &Path) -> Result<()> {
    let mut notebook = open_notebook(data_dir);
    let id = require_note(notebook.store().notes(), &args.note)?;

    let note = notebook
        .toggle_pin(&id)
        .with_context(|| format!("failed to save note in {}", data_dir.display()))?
        .with_context(|| format!("note not found: {}", id))?;

    let verb = if note.is_pinned() { "Pinned" } else { "Unpinned" };
    println!("{}: {} [{}]", verb, note.title(), note.id().prefix());
    Ok(())
}
