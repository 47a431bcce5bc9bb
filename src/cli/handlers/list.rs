//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_notebook, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, OutputFormat, print_json};
use crate::domain::{Note, Tag};
use crate::query::NoteFilter;

/// Builds the note filter from the command arguments (no I/O).
pub(crate) fn build_filter(args: &ListArgs) -> Result<NoteFilter> {
    let mut tags = Vec::new();
    for tag_str in args.tags.iter().flat_map(|arg| arg.split(',')) {
        if tag_str.trim().is_empty() {
            continue;
        }
        let tag = Tag::new(tag_str).with_context(|| format!("invalid tag: {}", tag_str))?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(NoteFilter::new()
        .with_query(args.search.clone().unwrap_or_default())
        .with_tags(tags)
        .pinned_only(args.pinned))
}

fn print_header() {
    println!("{:<10}  {:<40}  {:<24}  {:>10}", "ID", "Title", "Tags", "Modified");
    println!(
        "{:<10}  {:<40}  {:<24}  {:>10}",
        "----------",
        "----------------------------------------",
        "------------------------",
        "----------"
    );
}

fn print_row(note: &Note) {
    let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
    println!(
        "{:<10}  {:<40}  {:<24}  {:>10}",
        note.id().prefix(),
        truncate_str(note.title(), 40),
        truncate_str(&tags.join(","), 24),
        note.updated_at().as_datetime().format("%Y-%m-%d")
    );
}

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let filter = build_filter(args)?;
    let filtering = !filter.is_empty();

    let mut notebook = open_notebook(data_dir);
    notebook.set_filter(filter);

    match args.format {
        OutputFormat::Human => {
            let pinned = notebook.pinned_notes();
            let others = notebook.other_notes();

            if pinned.is_empty() && others.is_empty() {
                if filtering {
                    println!("No notes found. Try adjusting your search terms or filters.");
                } else {
                    println!("No notes found.");
                }
                return Ok(());
            }

            if !pinned.is_empty() {
                println!("Pinned");
                print_header();
                pinned.iter().for_each(|n| print_row(n));
            }

            if !others.is_empty() {
                if !pinned.is_empty() {
                    println!();
                    println!("Other notes");
                }
                print_header();
                others.iter().for_each(|n| print_row(n));
            }

            println!();
            println!("{} note(s)", pinned.len() + others.len());
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> =
                notebook.notes().into_iter().map(NoteListing::from).collect();
            print_json(listings)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn list_args(argv: &[&str]) -> ListArgs {
        let mut full = vec!["jot", "ls"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::List(args) => args,
            other => panic!("expected ls, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_is_an_empty_filter() {
        let filter = build_filter(&list_args(&[])).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.has_active_filters());
    }

    #[test]
    fn tags_are_normalized_and_deduplicated() {
        let filter = build_filter(&list_args(&["-t", "Work,home", "-t", "work"])).unwrap();
        let names: Vec<_> = filter.selected_tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["work", "home"]);
    }

    #[test]
    fn search_and_pinned_are_carried() {
        let filter = build_filter(&list_args(&["-s", "plan", "-p"])).unwrap();
        assert_eq!(filter.search_query, "plan");
        assert!(filter.show_pinned_only);
    }
}
