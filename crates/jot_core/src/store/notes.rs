//! Notes collection store.
//!
//! # Responsibility
//! - Own the in-memory notes list and mirror it to storage after every
//!   mutation.
//!
//! # Invariants
//! - New notes append at the end; insertion order is preserved on disk.
//! - Load and persist failures are logged, never surfaced: the running
//!   session treats memory as the source of truth.
//! - No field validation happens here; the creation flow gates input.

use crate::model::note::{Note, NoteId};
use crate::storage::{KeyValueStore, NOTES_KEY};
use crate::store::persister::PersistHandle;
use log::{error, info, warn};
use std::collections::HashSet;

/// In-memory notes collection with a background persistence mirror.
pub struct NotesStore {
    notes: Vec<Note>,
    persist: PersistHandle,
}

impl NotesStore {
    /// Loads the persisted collection once, at startup.
    ///
    /// An absent entry, a read failure, or a decode failure all leave the
    /// collection empty; the failure is logged and the app keeps going.
    pub fn load(kv: &dyn KeyValueStore, persist: PersistHandle) -> Self {
        let notes = match kv.get(NOTES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => {
                    info!(
                        "event=notes_load module=store status=ok count={}",
                        notes.len()
                    );
                    notes
                }
                Err(err) => {
                    warn!(
                        "event=notes_load module=store status=error stage=decode error={}",
                        err
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=error stage=read error={}",
                    err
                );
                Vec::new()
            }
        };

        Self { notes, persist }
    }

    /// Returns the full collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a note and enqueues the snapshot write.
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
        self.persist_snapshot();
    }

    /// Removes every note whose id is in `ids` and enqueues the snapshot
    /// write. Ids with no matching note are ignored without error.
    ///
    /// Returns the number of notes removed.
    pub fn delete_many(&mut self, ids: &HashSet<NoteId>) -> usize {
        let before = self.notes.len();
        self.notes.retain(|note| !ids.contains(&note.id));
        let removed = before - self.notes.len();
        self.persist_snapshot();
        removed
    }

    fn persist_snapshot(&self) {
        match serde_json::to_string(&self.notes) {
            Ok(payload) => self.persist.enqueue(NOTES_KEY, payload),
            Err(err) => {
                error!(
                    "event=persist module=store status=error key={} stage=encode error={}",
                    NOTES_KEY, err
                );
            }
        }
    }
}
