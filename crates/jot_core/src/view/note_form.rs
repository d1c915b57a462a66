//! Note creation form.
//!
//! # Invariants
//! - Both fields must be non-empty after trimming before anything is
//!   added; the saved note keeps the untrimmed field values.

use crate::model::note::Note;
use crate::store::notes::NotesStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-visible validation failure for the save action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFormError {
    /// Title or description was empty or whitespace-only.
    MissingField,
}

impl Display for NoteFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "Please enter both title and description"),
        }
    }
}

impl Error for NoteFormError {}

/// Draft state of the two creation-screen text fields.
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub title: String,
    pub description: String,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Validates the draft and appends the new note through the store.
    ///
    /// On success the created note is returned so the host can pop back
    /// to the list screen.
    ///
    /// # Errors
    /// - [`NoteFormError::MissingField`] blocks the save; no note is
    ///   added.
    pub fn save(&self, store: &mut NotesStore) -> Result<Note, NoteFormError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(NoteFormError::MissingField);
        }

        let note = Note::new(self.title.clone(), self.description.clone());
        store.add(note.clone());
        Ok(note)
    }
}
