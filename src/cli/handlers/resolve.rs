//! Note resolution utilities.

use anyhow::{Result, bail};

use crate::domain::{Note, NoteId};

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier to help distinguish them.
fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.title());
        if !note.tags().is_empty() {
            let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
            eprintln!("      tags: {}", tags.join(", "));
        }
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier to a unique note.
///
/// Resolution order:
/// 1. ID prefix match (if input looks like a ULID or UUID prefix)
/// 2. Exact title match, ignoring case
///
/// A single ID match wins outright. Otherwise ID and title matches are
/// pooled: one candidate is `Unique`, several are `Ambiguous`.
pub fn resolve_note<'a>(notes: &'a [Note], identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();

    // Looks like an id prefix: 4+ chars of ULID or UUID alphabet
    let looks_like_id = identifier.len() >= 4
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    let mut candidates: Vec<&Note> = Vec::new();

    if looks_like_id {
        let id_matches: Vec<&Note> = notes
            .iter()
            .filter(|n| n.id().matches_prefix(identifier))
            .collect();

        if let [only] = id_matches.as_slice() {
            return ResolveResult::Unique(only);
        }

        candidates.extend(id_matches);
    }

    let wanted = identifier.to_lowercase();
    candidates.extend(
        notes
            .iter()
            .filter(|n| n.title().to_lowercase() == wanted),
    );

    candidates.sort_by_key(|n| n.id().to_string());
    candidates.dedup_by(|a, b| a.id() == b.id());

    match candidates.as_slice() {
        [] => ResolveResult::NotFound,
        [only] => ResolveResult::Unique(only),
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// Resolves `identifier` or fails with a message naming it.
pub(crate) fn require_note(notes: &[Note], identifier: &str) -> Result<NoteId> {
    match resolve_note(notes, identifier) {
        ResolveResult::Unique(note) => Ok(note.id().clone()),
        ResolveResult::Ambiguous(candidates) => {
            print_ambiguous_notes(identifier, &candidates);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}
