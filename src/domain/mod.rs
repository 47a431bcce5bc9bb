//! Core types: Note, NoteId (ULID), Tag, NoteColor, Timestamp

mod color;
mod note;
mod note_id;
mod tag;
mod timestamp;

pub use color::{NoteColor, ParseColorError};
pub use note::{DEFAULT_TITLE, Note, NoteBuilder, NotePatch, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{ParseTagError, Tag};
pub use timestamp::{ParseTimestampError, Timestamp};
