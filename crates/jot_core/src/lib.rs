//! Core domain logic for Jot, a notes + to-do mobile app.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod nav;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::task::{Task, TaskId};
pub use nav::{Navigator, Screen, Tab};
pub use storage::{KeyValueStore, SqliteKeyValueStore, StorageError, StorageResult};
pub use store::notes::NotesStore;
pub use store::persister::{PersistHandle, Persister};
pub use store::tasks::{TaskError, TasksStore};
pub use view::note_detail::NoteDetail;
pub use view::note_form::{NoteForm, NoteFormError};
pub use view::notes_list::{DeletePrompt, NotesListState, PressOutcome};
pub use view::todo::TodoState;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
