//! Show command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_notebook;
use super::resolve::require_note;
use crate::cli::ShowArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::domain::Note;

fn print_note(note: &Note) {
    println!("# {}", note.title());
    println!();
    println!("ID:       {}", note.id());
    if !note.tags().is_empty() {
        let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
        println!("Tags:     {}", tags.join(", "));
    }
    if note.is_pinned() {
        println!("Pinned:   yes");
    }
    if let Some(color) = note.color() {
        println!("Color:    {}", color);
    }
    println!("Created:  {}", note.created_at());
    println!("Modified: {}", note.updated_at());

    if !note.content().is_empty() {
        println!();
        println!("{}", note.content());
    }
}

pub fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let notebook = open_notebook(data_dir);
    let id = require_note(notebook.store().notes(), &args.note)?;
    let note = notebook
        .get(&id)
        .with_context(|| format!("note not found: {}", id))?;

    match args.format {
        OutputFormat::Human => print_note(note),
        OutputFormat::Json => print_json(note)?,
    }

    Ok(())
}
