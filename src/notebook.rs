//! The read/mutate surface the front end works against.

use crate::domain::{Note, NoteId, NotePatch, Tag};
use crate::draft::{NoteDraft, SaveRequest};
use crate::query::{self, NoteFilter};
use crate::store::{Clock, NoteStore, Storage, StoreResult, SystemClock};
use tracing::debug;

/// A note store paired with the session's filter.
///
/// Reads (`notes`, `all_tags`) are derived fresh from the store on every
/// call, so they always reflect the latest mutation.
pub struct Notebook<S, C = SystemClock> {
    store: NoteStore<S, C>,
    filter: NoteFilter,
}

impl<S: Storage> Notebook<S, SystemClock> {
    pub fn open(storage: S) -> Self {
        Self::new(NoteStore::open(storage))
    }
}

impl<S: Storage, C: Clock> Notebook<S, C> {
    pub fn new(store: NoteStore<S, C>) -> Self {
        Self {
            store,
            filter: NoteFilter::default(),
        }
    }

    pub fn store(&self) -> &NoteStore<S, C> {
        &self.store
    }

    /// Visible notes under the current filter, in display order.
    pub fn notes(&self) -> Vec<&Note> {
        query::visible_notes(self.store.notes(), &self.filter)
    }

    /// Visible pinned notes, in display order.
    pub fn pinned_notes(&self) -> Vec<&Note> {
        self.notes().into_iter().filter(|n| n.is_pinned()).collect()
    }

    /// Visible unpinned notes, in display order.
    pub fn other_notes(&self) -> Vec<&Note> {
        self.notes().into_iter().filter(|n| !n.is_pinned()).collect()
    }

    /// Tag vocabulary of the whole collection, ignoring the filter.
    pub fn all_tags(&self) -> Vec<Tag> {
        query::all_tags(self.store.notes())
    }

    /// Number of notes regardless of the filter.
    pub fn total(&self) -> usize {
        self.store.len()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.store.get(id)
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: NoteFilter) {
        debug!(?filter, "filter changed");
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(NoteFilter::default());
    }

    pub fn create(&mut self, title: &str, content: &str, tags: Vec<Tag>) -> StoreResult<Note> {
        self.store.create(title, content, tags)
    }

    pub fn update(&mut self, id: &NoteId, patch: NotePatch) -> StoreResult<Option<Note>> {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &NoteId) -> StoreResult<Option<Note>> {
        self.store.delete(id)
    }

    pub fn toggle_pin(&mut self, id: &NoteId) -> StoreResult<Option<Note>> {
        self.store.toggle_pin(id)
    }

    /// Saves an editor draft.
    ///
    /// Returns `Ok(None)` without touching the store when the draft is blank
    /// or names a note that no longer exists.
    pub fn save(&mut self, draft: NoteDraft) -> StoreResult<Option<Note>> {
        let Some(request) = draft.into_request() else {
            debug!("draft has no title or content, not saving");
            return Ok(None);
        };

        match request {
            SaveRequest::Create {
                title,
                content,
                tags,
                color,
                pinned,
            } => {
                let extras = NotePatch {
                    color: color.map(Some),
                    is_pinned: pinned.then_some(true),
                    ..NotePatch::default()
                };
                self.store
                    .create_with(&title, &content, tags, extras)
                    .map(Some)
            }
            SaveRequest::Update { id, patch } => self.store.update(&id, patch),
        }
    }
}
