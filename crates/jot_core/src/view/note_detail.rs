//! Note detail screen: single delete and share-payload formatting.
//!
//! The detail screen receives its note by value from navigation, so it
//! stays renderable even while the underlying collection changes.

use crate::model::note::Note;
use crate::store::notes::NotesStore;
use std::collections::HashSet;

/// Host-facing confirmation text for the single-note delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

/// Formats the payload handed to the host share sheet.
///
/// The host owns the actual share invocation; a failure there is logged
/// on its side and never surfaced as an error dialog.
pub fn share_payload(title: &str, description: &str) -> String {
    format!("Note Title: {title}\n\nNote Details: {description}")
}

/// Detail screen state holding the note passed in navigation.
#[derive(Debug, Clone)]
pub struct NoteDetail {
    note: Note,
}

impl NoteDetail {
    pub fn new(note: Note) -> Self {
        Self { note }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn share_payload(&self) -> String {
        share_payload(&self.note.title, &self.note.description)
    }

    /// Confirmed delete: removes this note via a single-id bulk delete.
    ///
    /// Consumes the screen state; the host pops back to the list.
    /// Cancelling on the host side is a no-op.
    pub fn confirm_delete(self, store: &mut NotesStore) {
        let ids: HashSet<_> = [self.note.id].into_iter().collect();
        store.delete_many(&ids);
    }
}
