//! Encoding of the note collection to and from its stored JSON form.
//!
//! The stored value is a JSON array of note objects:
//!
//! ```json
//! [{"id":"01HQ3K5M7NXJK4QZPW8V2R6T9Y","title":"Groceries","content":"",
//!   "tags":["home"],"isPinned":false,"color":"yellow",
//!   "createdAt":"2024-01-15T10:30:00.000Z","updatedAt":"2024-01-15T10:30:00.000Z"}]
//! ```
//!
//! `color` is omitted when unset. Decoding re-validates every note.

use crate::domain::{Note, NoteId};
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a stored value cannot be turned back into notes.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed note data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate note id: {id}")]
    DuplicateId { id: NoteId },
}

/// Serializes the collection in order.
pub fn encode_notes(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Parses a stored collection, rejecting invalid notes and repeated ids.
pub fn decode_notes(raw: &str) -> Result<Vec<Note>, DecodeError> {
    let notes: Vec<Note> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id()) {
            return Err(DecodeError::DuplicateId {
                id: note.id().clone(),
            });
        }
    }

    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoteColor, Tag, Timestamp};
    use pretty_assertions::assert_eq;

    fn note(id: &str, title: &str) -> Note {
        let ts: Timestamp = "2024-01-15T10:30:00.123Z".parse().unwrap();
        Note::builder(id.parse().unwrap(), title, ts, ts)
            .content("body")
            .tags(vec![Tag::new("home").unwrap(), Tag::new("to read").unwrap()])
            .color(Some(NoteColor::Purple))
            .pinned(true)
            .build()
            .unwrap()
    }

    #[test]
    fn round_trip_preserves_collection() {
        let notes = vec![
            note("01HQ3K5M7NXJK4QZPW8V2R6T9Y", "First"),
            note("01HQ4A2R9PXJK4QZPW8V2R6T9Y", "Second"),
        ];
        let encoded = encode_notes(&notes).unwrap();
        assert_eq!(decode_notes(&encoded).unwrap(), notes);
    }

    #[test]
    fn empty_collection_is_empty_array() {
        assert_eq!(encode_notes(&[]).unwrap(), "[]");
        assert!(decode_notes("[]").unwrap().is_empty());
    }

    #[test]
    fn decodes_data_written_by_the_web_app() {
        let raw = r#"[{"id":"3b241101-e2bb-4255-8caf-4136c566a962","title":"Groceries",
            "content":"milk","tags":["home"],"isPinned":false,
            "createdAt":"2024-01-15T10:30:00.000Z","updatedAt":"2024-01-15T10:31:00.000Z"}]"#;
        let notes = decode_notes(raw).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id().as_str(), "3b241101-e2bb-4255-8caf-4136c566a962");
        assert_eq!(notes[0].title(), "Groceries");
        assert_eq!(notes[0].color(), None);
    }

    #[test]
    fn mixed_uuid_and_ulid_ids_round_trip() {
        let raw = r#"[
            {"id":"3b241101-e2bb-4255-8caf-4136c566a962","title":"Old","content":"",
             "tags":[],"isPinned":true,"color":"pink",
             "createdAt":"2024-01-15T10:30:00.000Z","updatedAt":"2024-01-15T10:30:00.000Z"},
            {"id":"01HQ3K5M7NXJK4QZPW8V2R6T9Y","title":"New","content":"",
             "tags":[],"isPinned":false,
             "createdAt":"2024-01-16T10:30:00.000Z","updatedAt":"2024-01-16T10:30:00.000Z"}]"#;
        let notes = decode_notes(raw).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(decode_notes(&encode_notes(&notes).unwrap()).unwrap(), notes);
    }

    #[test]
    fn rejects_blank_ids() {
        let raw = r#"[{"id":"","title":"x","content":"","tags":[],"isPinned":false,
            "createdAt":"2024-01-15T10:30:00.000Z","updatedAt":"2024-01-15T10:30:00.000Z"}]"#;
        assert!(matches!(decode_notes(raw), Err(DecodeError::Json(_))));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode_notes("not json"), Err(DecodeError::Json(_))));
        assert!(matches!(decode_notes("{}"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dup = vec![
            note("01HQ3K5M7NXJK4QZPW8V2R6T9Y", "One"),
            note("01HQ3K5M7NXJK4QZPW8V2R6T9Y", "Two"),
        ];
        let encoded = encode_notes(&dup).unwrap();
        assert!(matches!(
            decode_notes(&encoded),
            Err(DecodeError::DuplicateId { .. })
        ));
    }

    #[test]
    fn rejects_invalid_tags() {
        let raw = r#"[{"id":"01HQ3K5M7NXJK4QZPW8V2R6T9Y","title":"x","tags":[""],
            "createdAt":"2024-01-15T10:30:00.000Z","updatedAt":"2024-01-15T10:30:00.000Z"}]"#;
        assert!(decode_notes(raw).is_err());
    }
}
