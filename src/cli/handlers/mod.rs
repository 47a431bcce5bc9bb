//! Command handlers for the CLI.

mod delete;
mod edit;
mod list;
mod new;
mod pin;
mod resolve;
mod show;
mod tags;

use std::path::Path;

use crate::draft::NoteDraft;
use crate::notebook::Notebook;
use crate::store::FileStorage;

// Re-export public items
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;
pub use pin::handle_pin;
pub use resolve::{ResolveResult, resolve_note};
pub use show::handle_show;
pub use tags::handle_tags;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the notebook stored in `data_dir`.
pub(crate) fn open_notebook(data_dir: &Path) -> Notebook<FileStorage> {
    Notebook::open(FileStorage::new(data_dir))
}

/// Adds every tag argument (each may hold several comma-separated tags).
pub(crate) fn add_tag_args(draft: &mut NoteDraft, args: &[String]) {
    for arg in args {
        draft.add_tags_from_input(arg);
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_str_short_is_unchanged() {
        assert_eq!(truncate_str("plan", 10), "plan");
    }

    #[test]
    fn truncate_str_long_gets_ellipsis() {
        assert_eq!(truncate_str("Launch plan for Q3", 8), "Launch …");
        assert_eq!(truncate_str("Launch plan for Q3", 8).chars().count(), 8);
    }

    #[test]
    fn add_tag_args_accepts_repeated_and_comma_lists() {
        let mut draft = NoteDraft::new();
        add_tag_args(&mut draft, &["home,Errands".to_string(), "work".to_string()]);
        let names: Vec<_> = draft.tags().iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["home", "errands", "work"]);
    }
}
