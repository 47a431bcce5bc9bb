//! New note command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{add_tag_args, open_notebook};
use crate::cli::NewArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::draft::NoteDraft;

/// Builds the draft for a new note from the command arguments (no I/O).
pub(crate) fn draft_from_args(args: &NewArgs) -> NoteDraft {
    let mut draft = NoteDraft::new();
    draft.set_title(args.title.as_str());
    draft.set_content(args.content.as_str());
    add_tag_args(&mut draft, &args.tags);
    draft.set_color(args.color);
    draft.set_pinned(args.pin);
    draft
}

pub fn handle_new(args: &NewArgs, data_dir: &Path) -> Result<()> {
    let draft = draft_from_args(args);
    if !draft.can_save() {
        bail!("nothing to save: title and content are both blank");
    }

    let mut notebook = open_notebook(data_dir);
    let note = notebook
        .save(draft)
        .with_context(|| format!("failed to save note in {}", data_dir.display()))?
        .context("note was not created")?;

    match args.format {
        OutputFormat::Human => {
            println!("Created: {} [{}]", note.title(), note.id().prefix());
        }
        OutputFormat::Json => print_json(&note)?,
    }

    Ok(())
}
