//! The note editor's working copy and its save guard.

use crate::domain::{DEFAULT_TITLE, Note, NoteColor, NoteId, NotePatch, Tag};

/// What a save should do once a draft passes the guard.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create {
        title: String,
        content: String,
        tags: Vec<Tag>,
        color: Option<NoteColor>,
        pinned: bool,
    },
    Update {
        id: NoteId,
        patch: NotePatch,
    },
}

/// An in-progress edit of a new or existing note.
///
/// Nothing touches the store until [`NoteDraft::into_request`] turns the
/// draft into a [`SaveRequest`], and a draft whose title and content are
/// both blank never does.
///
/// # Examples
///
/// ```
/// use jot::draft::NoteDraft;
///
/// let draft = NoteDraft::new();
/// assert!(draft.into_request().is_none());
///
/// let mut draft = NoteDraft::new();
/// draft.set_content("call the dentist");
/// draft.add_tags_from_input("Todo, health");
/// assert!(draft.can_save());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    editing: Option<NoteId>,
    title: String,
    content: String,
    tags: Vec<Tag>,
    color: Option<NoteColor>,
    pinned: bool,
}

impl NoteDraft {
    /// A blank draft for a new note.
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft seeded from an existing note.
    pub fn edit(note: &Note) -> Self {
        Self {
            editing: Some(note.id().clone()),
            title: note.title().to_string(),
            content: note.content().to_string(),
            tags: note.tags().to_vec(),
            color: note.color(),
            pinned: note.is_pinned(),
        }
    }

    pub fn editing(&self) -> Option<&NoteId> {
        self.editing.as_ref()
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

    pub fn color(&self) -> Option<NoteColor> {
        self.color
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_color(&mut self, color: Option<NoteColor>) {
        self.color = color;
    }

    /// Only honored for new notes; existing notes pin through the store.
    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    /// Adds one tag as typed. Returns false if the input was blank, invalid,
    /// or already present.
    pub fn add_tag(&mut self, input: &str) -> bool {
        match Tag::new(input) {
            Ok(tag) if !self.tags.contains(&tag) => {
                self.tags.push(tag);
                true
            }
            _ => false,
        }
    }

    /// Adds every comma-separated tag in `input`. Returns how many were new.
    pub fn add_tags_from_input(&mut self, input: &str) -> usize {
        input
            .split(',')
            .filter(|part| self.add_tag(part))
            .count()
    }

    /// Removes `tag` if present.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Drops the most recently added tag (backspace in an empty tag box).
    pub fn pop_tag(&mut self) -> Option<Tag> {
        self.tags.pop()
    }

    /// A draft can be saved once its title or content has visible text.
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty()
    }

    /// Turns the draft into a save request, or `None` if there is nothing to save.
    pub fn into_request(self) -> Option<SaveRequest> {
        if !self.can_save() {
            return None;
        }

        let title = if self.title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            self.title
        };

        Some(match self.editing {
            Some(id) => SaveRequest::Update {
                id,
                patch: NotePatch::new()
                    .title(title)
                    .content(self.content)
                    .tags(self.tags)
                    .color(self.color),
            },
            None => SaveRequest::Create {
                title,
                content: self.content,
                tags: self.tags,
                color: self.color,
                pinned: self.pinned,
            },
        })
    }
}
