//! Builder for test notes with sensible defaults.

use jot::domain::{Note, NoteColor, NoteId, Tag, Timestamp};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and timestamps, with a fluent API
/// for setting optional fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    pinned: bool,
    color: Option<NoteColor>,
    created: Timestamp,
    updated: Timestamp,
}

#[allow(dead_code)]
impl TestNote {
    /// Creates a new test note with the given title, stamped now.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            pinned: false,
            color: None,
            created: now,
            updated: now,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.parse().expect("Invalid NoteId");
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(Tag::new(tag).expect("Invalid tag"));
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets both timestamps from an RFC 3339 string.
    pub fn at(mut self, when: &str) -> Self {
        let ts: Timestamp = when.parse().expect("Invalid timestamp");
        self.created = ts;
        self.updated = ts;
        self
    }

    /// Sets only the last-modified timestamp.
    pub fn updated(mut self, when: &str) -> Self {
        self.updated = when.parse().expect("Invalid timestamp");
        self
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> String {
        self.id.prefix()
    }

    /// Converts to a domain note.
    pub fn to_note(&self) -> Note {
        Note::builder(self.id.clone(), self.title.as_str(), self.created, self.updated)
            .content(self.content.as_str())
            .tags(self.tags.clone())
            .pinned(self.pinned)
            .color(self.color)
            .build()
            .expect("Failed to build note")
    }
}
