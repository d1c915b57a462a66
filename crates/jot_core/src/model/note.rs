//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Notes are immutable once saved; the only lifecycle transition is
//!   removal from the owning collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A persisted title + description record.
///
/// There is no edit flow: a note keeps the exact field values it was
/// created with until it is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for selection and deletion.
    pub id: NoteId,
    /// User-entered title, stored untrimmed.
    pub title: String,
    /// User-entered body text, stored untrimmed.
    pub description: String,
}

impl Note {
    /// Creates a new note with a generated stable ID.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by tests and decode paths where identity already exists.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn new_notes_get_distinct_ids() {
        let a = Note::new("a", "first");
        let b = Note::new("b", "second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_schema_field_names() {
        let note = Note::new("Groceries", "milk, eggs");
        let json = serde_json::to_value(&note).expect("note should serialize");
        assert!(json.get("id").is_some());
        assert_eq!(json["title"], "Groceries");
        assert_eq!(json["description"], "milk, eggs");
    }
}
