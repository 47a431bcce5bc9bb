//! The authoritative note collection and its persistence.

use crate::domain::{Note, NoteId, NotePatch, Tag};
use crate::store::clock::{Clock, SystemClock};
use crate::store::codec::{decode_notes, encode_notes};
use crate::store::storage::{Storage, StorageError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key the collection is written under.
pub const STORAGE_KEY: &str = "notes-app-data";

/// Errors returned by store mutations.
///
/// Only persistence can fail; when it does, the in-memory collection is left
/// exactly as it was before the call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to persist notes: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for store mutations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Owns the note collection and mirrors it to a [`Storage`] backend.
///
/// Newest-created notes sit at the front of the collection. Every mutation
/// that changes something rewrites the whole collection before returning;
/// mutations naming an unknown id change nothing and return `None`.
///
/// # Examples
///
/// ```
/// use jot::store::{MemoryStorage, NoteStore};
///
/// let mut store = NoteStore::open(MemoryStorage::new());
/// let note = store.create("Groceries", "milk", Vec::new()).unwrap();
/// assert_eq!(store.get(note.id()), Some(&note));
/// ```
pub struct NoteStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    notes: Vec<Note>,
}

impl<S: Storage> NoteStore<S, SystemClock> {
    /// Opens the store on `storage` using wall-clock time.
    pub fn open(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> NoteStore<S, C> {
    /// Opens the store, loading whatever `storage` holds under [`STORAGE_KEY`].
    ///
    /// Missing or unreadable data yields an empty collection; the failure is
    /// logged, never returned.
    pub fn with_clock(storage: S, clock: C) -> Self {
        let notes = load(&storage);
        Self {
            storage,
            clock,
            notes,
        }
    }

    /// All notes in collection order (newest-created first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Creates a note and puts it at the front of the collection.
    ///
    /// A blank title becomes "Untitled"; title and content are trimmed.
    pub fn create(&mut self, title: &str, content: &str, tags: Vec<Tag>) -> StoreResult<Note> {
        self.create_with(title, content, tags, NotePatch::default())
    }

    /// Like [`create`](Self::create), merging `extras` (typically color and
    /// pin) into the new note before its single write. The note is stored
    /// whole or not at all, and `updated_at` equals `created_at`.
    pub fn create_with(
        &mut self,
        title: &str,
        content: &str,
        tags: Vec<Tag>,
        extras: NotePatch,
    ) -> StoreResult<Note> {
        let now = self.clock.now();
        let mut note = Note::create(NoteId::new(), title, content, tags, now);
        if !extras.is_empty() {
            note.apply(extras, now);
        }

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;

        info!(id = %note.id(), title = note.title(), "created note");
        Ok(note)
    }

    /// Merges `patch` into the note with `id` and refreshes its `updated_at`.
    pub fn update(&mut self, id: &NoteId, patch: NotePatch) -> StoreResult<Option<Note>> {
        let now = self.clock.now();
        self.modify(id, "update", |note| note.apply(patch, now))
    }

    /// Flips the pin state of the note with `id`.
    pub fn toggle_pin(&mut self, id: &NoteId) -> StoreResult<Option<Note>> {
        let now = self.clock.now();
        self.modify(id, "toggle_pin", |note| note.toggle_pin(now))
    }

    /// Removes the note with `id`, returning it.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<Option<Note>> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "delete: no such note");
            return Ok(None);
        };

        let mut next = self.notes.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(id = %id, "deleted note");
        Ok(Some(removed))
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    fn modify<F>(&mut self, id: &NoteId, op: &str, f: F) -> StoreResult<Option<Note>>
    where
        F: FnOnce(&mut Note),
    {
        let Some(index) = self.position(id) else {
            debug!(id = %id, op, "no such note");
            return Ok(None);
        };

        let mut next = self.notes.clone();
        f(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next)?;

        info!(id = %id, op, "updated note");
        Ok(Some(updated))
    }

    // Persist first, then swap, so memory never runs ahead of storage.
    fn commit(&mut self, next: Vec<Note>) -> StoreResult<()> {
        let raw = encode_notes(&next)?;
        self.storage.set(STORAGE_KEY, &raw)?;
        self.notes = next;
        Ok(())
    }
}

fn load<S: Storage>(storage: &S) -> Vec<Note> {
    match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => match decode_notes(&raw) {
            Ok(notes) => {
                debug!(count = notes.len(), "loaded notes");
                notes
            }
            Err(e) => {
                warn!(error = %e, "failed to load notes from storage, starting empty");
                Vec::new()
            }
        },
        Ok(None) => {
            debug!("no stored notes, starting empty");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "failed to read notes from storage, starting empty");
            Vec::new()
        }
    }
}
