//! Filter criteria for the visible note list.

use crate::domain::{Note, Tag};
use serde::{Deserialize, Serialize};

/// The active search, tag, and pinned-only criteria.
///
/// Lives only for the session; it is never written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFilter {
    pub search_query: String,
    pub selected_tags: Vec<Tag>,
    pub show_pinned_only: bool,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.selected_tags = tags;
        self
    }

    pub fn pinned_only(mut self, pinned_only: bool) -> Self {
        self.show_pinned_only = pinned_only;
        self
    }

    /// Selects `tag` if it is not selected, deselects it otherwise.
    pub fn toggle_tag(&mut self, tag: Tag) {
        if let Some(pos) = self.selected_tags.iter().position(|t| *t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag);
        }
    }

    /// Resets every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when a tag or the pinned-only switch is set (the query is not counted).
    pub fn has_active_filters(&self) -> bool {
        !self.selected_tags.is_empty() || self.show_pinned_only
    }

    /// True when no criterion at all is set.
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty() && !self.has_active_filters()
    }

    /// Returns true if `note` passes every set criterion.
    ///
    /// - query: case-insensitive substring of the title, content, or any tag
    /// - tags: the note carries at least one selected tag
    /// - pinned-only: the note is pinned
    pub fn matches(&self, note: &Note) -> bool {
        if !self.search_query.is_empty() && !matches_query(note, &self.search_query.to_lowercase())
        {
            return false;
        }

        if !self.selected_tags.is_empty() && !self.selected_tags.iter().any(|t| note.has_tag(t)) {
            return false;
        }

        !self.show_pinned_only || note.is_pinned()
    }
}

fn matches_query(note: &Note, query: &str) -> bool {
    note.title().to_lowercase().contains(query)
        || note.content().to_lowercase().contains(query)
        || note.tags().iter().any(|t| t.as_str().contains(query))
}
