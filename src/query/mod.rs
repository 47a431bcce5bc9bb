//! Filter & sort engine: pure derivations over the note collection.
//!
//! Nothing here holds state; callers re-run these on every change.

mod filter;

pub use filter::NoteFilter;

use crate::domain::{Note, Tag};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Display order: pinned before unpinned, then most recently updated first.
pub fn display_order(a: &Note, b: &Note) -> Ordering {
    b.is_pinned()
        .cmp(&a.is_pinned())
        .then_with(|| b.updated_at().cmp(&a.updated_at()))
}

/// Returns the notes passing `filter`, in display order.
///
/// The sort is stable: notes that compare equal keep their input order.
pub fn visible_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let mut visible: Vec<&Note> = notes.iter().filter(|n| filter.matches(n)).collect();
    visible.sort_by(|a, b| display_order(a, b));
    visible
}

/// Every distinct tag across the whole collection, sorted ascending.
pub fn all_tags(notes: &[Note]) -> Vec<Tag> {
    notes
        .iter()
        .flat_map(|n| n.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Each distinct tag with the number of notes carrying it, sorted by tag.
pub fn tag_counts(notes: &[Note]) -> Vec<(Tag, usize)> {
    let mut counts = std::collections::BTreeMap::new();
    for tag in notes.iter().flat_map(|n| n.tags()) {
        *counts.entry(tag.clone()).or_insert(0usize) += 1;
    }
    counts.into_iter().collect()
}
