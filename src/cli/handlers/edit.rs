//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::resolve::require_note;
use super::{add_tag_args, open_notebook};
use crate::cli::EditArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::domain::{Note, Tag};
use crate::draft::NoteDraft;

fn requests_change(args: &EditArgs) -> bool {
    args.title.is_some()
        || args.content.is_some()
        || !args.tags.is_empty()
        || !args.untags.is_empty()
        || args.color.is_some()
        || args.no_color
}

/// Applies the edit arguments to a draft of `note` (no I/O).
pub(crate) fn apply_edits(note: &Note, args: &EditArgs) -> Result<NoteDraft> {
    let mut draft = NoteDraft::edit(note);

    if let Some(title) = &args.title {
        draft.set_title(title.as_str());
    }
    if let Some(content) = &args.content {
        draft.set_content(content.as_str());
    }
    for untag in &args.untags {
        let tag = Tag::new(untag).with_context(|| format!("invalid tag: {}", untag))?;
        draft.remove_tag(&tag);
    }
    add_tag_args(&mut draft, &args.tags);
    if args.no_color {
        draft.set_color(None);
    } else if args.color.is_some() {
        draft.set_color(args.color);
    }

    Ok(draft)
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path) -> Result<()> {
    if !requests_change(args) {
        bail!("nothing to change: pass --title, --content, --tag, --untag, --color or --no-color");
    }

    let mut notebook = open_notebook(data_dir);
    let id = require_note(notebook.store().notes(), &args.note)?;
    let note = notebook
        .get(&id)
        .with_context(|| format!("note disappeared: {}", id))?;

    let draft = apply_edits(note, args)?;
    if !draft.can_save() {
        bail!("nothing to save: title and content would both be blank");
    }

    let updated = notebook
        .save(draft)
        .with_context(|| format!("failed to save note in {}", data_dir.display()))?
        .with_context(|| format!("note not found: {}", id))?;

    match args.format {
        OutputFormat::Human => {
            println!("Updated: {} [{}]", updated.title(), updated.id().prefix());
        }
        OutputFormat::Json => print_json(&updated)?,
    }

    Ok(())
}
