//! Notes list screen state: live title filter and multi-select mode.
//!
//! # Invariants
//! - The filter always runs against the full unfiltered collection.
//! - Selection mode is entered by a long-press and exits automatically
//!   when the selection becomes empty.
//! - Bulk delete only happens through an explicit confirm; cancel is a
//!   true no-op.

use crate::model::note::{Note, NoteId};
use crate::store::notes::NotesStore;
use std::collections::HashSet;

/// Outcome of a short press on a list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Selection mode inactive: navigate to the detail screen carrying
    /// the full note value.
    OpenDetail(Note),
    /// Selection mode active: the row's selection flag was toggled.
    SelectionToggled { selected: bool },
}

/// Confirmation request produced before a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePrompt {
    pub count: usize,
}

impl DeletePrompt {
    /// Host-facing confirmation text.
    pub fn message(&self) -> String {
        format!(
            "Are you sure you want to delete {} note{}?",
            self.count,
            if self.count > 1 { "s" } else { "" }
        )
    }
}

/// Transient state of the notes list screen.
#[derive(Debug, Default)]
pub struct NotesListState {
    query: String,
    selected: HashSet<NoteId>,
    selection_mode: bool,
}

impl NotesListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live search query; recomputation happens on read.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Case-insensitive substring filter over note titles.
    ///
    /// An empty query matches everything.
    pub fn visible<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        let needle = self.query.to_lowercase();
        notes
            .iter()
            .filter(|note| note.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: NoteId) -> bool {
        self.selected.contains(&id)
    }

    /// Long-press on a row: enters selection mode and selects that row.
    pub fn long_press(&mut self, id: NoteId) {
        self.selection_mode = true;
        self.toggle_selection(id);
    }

    /// Short press on a row.
    ///
    /// Returns `None` when the id no longer names a note outside
    /// selection mode (a stale row between render and press).
    pub fn press(&mut self, store: &NotesStore, id: NoteId) -> Option<PressOutcome> {
        if self.selection_mode {
            let selected = self.toggle_selection(id);
            return Some(PressOutcome::SelectionToggled { selected });
        }

        store
            .get(id)
            .cloned()
            .map(PressOutcome::OpenDetail)
    }

    /// Produces the confirmation request for the pending bulk delete.
    ///
    /// `None` when nothing is selected; cancelling on the host side is a
    /// no-op (no state to roll back).
    pub fn delete_prompt(&self) -> Option<DeletePrompt> {
        if self.selected.is_empty() {
            return None;
        }
        Some(DeletePrompt {
            count: self.selected.len(),
        })
    }

    /// Confirmed bulk delete: removes every selected note, clears the
    /// selection and leaves selection mode.
    ///
    /// Returns the number of notes removed.
    pub fn confirm_delete(&mut self, store: &mut NotesStore) -> usize {
        let removed = store.delete_many(&self.selected);
        self.selected.clear();
        self.selection_mode = false;
        removed
    }

    fn toggle_selection(&mut self, id: NoteId) -> bool {
        let selected = if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        };

        if self.selected.is_empty() {
            self.selection_mode = false;
        }
        selected
    }
}
