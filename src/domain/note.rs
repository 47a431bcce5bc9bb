//! Note struct and the partial-update payload applied to it.

use crate::domain::tag::dedup_tags;
use crate::domain::{NoteColor, NoteId, Tag, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to notes saved without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    UpdatedBeforeCreated,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::UpdatedBeforeCreated => {
                write!(f, "invalid note: updatedAt is earlier than createdAt")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A single user-authored note.
///
/// Fields are private so the invariants hold for every value in the
/// program: the title is trimmed and non-empty, tags carry no duplicates,
/// and `updated_at >= created_at`.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId, Timestamp};
///
/// let now = Timestamp::now();
/// let note = Note::builder(NoteId::new(), "  ", now, now).build().unwrap();
/// assert_eq!(note.title(), "Untitled");
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    is_pinned: bool,
    color: Option<NoteColor>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Note {
    /// Creates a builder for a note with the given identity and timestamps.
    pub fn builder(
        id: NoteId,
        title: impl Into<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> NoteBuilder {
        NoteBuilder::new(id, title, created_at, updated_at)
    }

    /// Creates a fresh note stamped `now`, as the store does for new notes.
    ///
    /// The title is normalized and the content trimmed.
    pub(crate) fn create(
        id: NoteId,
        title: &str,
        content: &str,
        tags: Vec<Tag>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            title: normalize_title(title),
            content: content.trim().to_string(),
            tags: dedup_tags(tags),
            is_pinned: false,
            color: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    pub fn color(&self) -> Option<NoteColor> {
        self.color
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true if the note carries `tag`.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Merges `patch` into the note and refreshes `updated_at`.
    pub(crate) fn apply(&mut self, patch: NotePatch, now: Timestamp) {
        if let Some(title) = patch.title {
            self.title = normalize_title(&title);
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = dedup_tags(tags);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(pinned) = patch.is_pinned {
            self.is_pinned = pinned;
        }
        self.touch(now);
    }

    pub(crate) fn toggle_pin(&mut self, now: Timestamp) {
        self.is_pinned = !self.is_pinned;
        self.touch(now);
    }

    // Never moves backwards, even if the clock does.
    fn touch(&mut self, now: Timestamp) {
        self.updated_at = self.updated_at.max(now);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("tags", &self.tags)
            .field("is_pinned", &self.is_pinned)
            .field("color", &self.color)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    is_pinned: bool,
    color: Option<NoteColor>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl NoteBuilder {
    fn new(
        id: NoteId,
        title: impl Into<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            is_pinned: false,
            color: None,
            created_at,
            updated_at,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the note's tags.
    ///
    /// Duplicates are removed (first occurrence kept).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = dedup_tags(tags);
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = is_pinned;
        self
    }

    pub fn color(mut self, color: Option<NoteColor>) -> Self {
        self.color = color;
        self
    }

    /// Builds the Note. A blank title becomes [`DEFAULT_TITLE`].
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if `updated_at` is earlier than `created_at`.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        if self.updated_at < self.created_at {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::UpdatedBeforeCreated,
            });
        }

        Ok(Note {
            id: self.id,
            title: normalize_title(&self.title),
            content: self.content,
            tags: self.tags,
            is_pinned: self.is_pinned,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A partial update to a note. `None` fields are left untouched.
///
/// `color` is doubly optional: `Some(None)` clears the color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub color: Option<Option<NoteColor>>,
    pub is_pinned: Option<bool>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn color(mut self, color: Option<NoteColor>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    /// Returns true if the patch changes no field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.color.is_none()
            && self.is_pinned.is_none()
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("tags", &self.tags)?;
        map.serialize_entry("isPinned", &self.is_pinned)?;
        if let Some(color) = self.color {
            map.serialize_entry("color", &color)?;
        }
        map.serialize_entry("createdAt", &self.created_at)?;
        map.serialize_entry("updatedAt", &self.updated_at)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct NoteHelper {
            id: NoteId,
            title: String,
            #[serde(default)]
            content: String,
            #[serde(default)]
            tags: Vec<Tag>,
            #[serde(default)]
            is_pinned: bool,
            #[serde(default)]
            color: Option<NoteColor>,
            created_at: Timestamp,
            updated_at: Timestamp,
        }

        let helper = NoteHelper::deserialize(deserializer)?;

        Note::builder(helper.id, helper.title, helper.created_at, helper.updated_at)
            .content(helper.content)
            .tags(helper.tags)
            .pinned(helper.is_pinned)
            .color(helper.color)
            .build()
            .map_err(serde::de::Error::custom)
    }
}
