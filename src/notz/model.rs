use serde::{Deserialize, Serialize};
use std::fmt;

/// A single note: a titled, prioritized, categorized record with an
/// archived flag.
///
/// Priority is an opaque filter key with no enforced bounds. The archived
/// flag starts false and only ever transitions to true (there is no
/// unarchive operation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub priority: i32,
    pub category: String,
    #[serde(default)]
    pub archived: bool,
}

impl Note {
    pub fn new(title: String, priority: i32, category: String) -> Self {
        Self {
            title,
            priority,
            category,
            archived: false,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.archived { "archived" } else { "active" };
        write!(
            f,
            "{} [priority: {}, category: {}] ({})",
            self.title, self.priority, self.category, status
        )
    }
}

/// Replacement fields for an in-place update.
///
/// Applied all-or-nothing; the archived flag is never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: String,
    pub priority: i32,
    pub category: String,
}

impl NoteUpdate {
    pub fn new(title: String, priority: i32, category: String) -> Self {
        Self {
            title,
            priority,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notes_start_active() {
        let note = Note::new("Buy milk".into(), 1, "Home".into());
        assert!(!note.archived);
    }

    #[test]
    fn rendering_includes_every_field() {
        let mut note = Note::new("Buy milk".into(), 1, "Home".into());
        assert_eq!(note.to_string(), "Buy milk [priority: 1, category: Home] (active)");

        note.archived = true;
        assert_eq!(
            note.to_string(),
            "Buy milk [priority: 1, category: Home] (archived)"
        );
    }

    #[test]
    fn archived_flag_defaults_false_when_absent_from_json() {
        let note: Note =
            serde_json::from_str(r#"{"title":"A","priority":3,"category":"Work"}"#).unwrap();
        assert!(!note.archived);
    }
}
