//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the notes and to-do screens' operations to Dart via FRB.
//! - Own the process-level application state (stores + screen state).
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Mutations apply to in-memory state before the call returns; the
//!   durable write happens on the background persistence worker.
//! - Confirmation-gated deletes only run through the `*_delete*`
//!   functions the host calls after its confirm dialog.

use jot_core::storage::SqliteKeyValueStore;
use jot_core::view::note_detail::{share_payload as share_payload_inner, DELETE_PROMPT};
use jot_core::view::todo;
use jot_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    NoteDetail, NoteForm, NotesListState, NotesStore, Persister, PressOutcome, TasksStore,
    TodoState,
};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const APP_DB_FILE_NAME: &str = "jot_app.sqlite3";
static APP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static APP: OnceCell<Mutex<App>> = OnceCell::new();

/// Process-level application state behind the FFI boundary.
///
/// The core stays singleton-free; this is the one place that owns the
/// constructed stores and hands them to the screen state by reference.
struct App {
    notes: NotesStore,
    tasks: TasksStore,
    notes_view: NotesListState,
    todo_view: TodoState,
    persister: Persister,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One notes-list row as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Whether the row is highlighted in selection mode.
    pub selected: bool,
}

/// Notes list screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Rows surviving the current title filter, in insertion order.
    pub items: Vec<NoteItem>,
    pub selection_mode: bool,
    pub selected_count: u32,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Outcome of a row press on the notes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePressResponse {
    /// Set when the press should navigate to the detail screen; carries
    /// the full note value.
    pub open_note: Option<NoteItem>,
    pub selection_mode: bool,
    pub selected_count: u32,
    pub message: String,
}

/// Confirmation request for the pending bulk delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePromptResponse {
    /// False when nothing is selected and no dialog should show.
    pub ok: bool,
    pub count: u32,
    /// Dialog body text.
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional affected record ID.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// One to-do row as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    pub text: String,
    /// Drives the struck-through text style.
    pub completed: bool,
}

/// To-do screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    /// Rows in newest-first order; empty together with `placeholder`.
    pub items: Vec<TaskItem>,
    /// Empty-state message shown instead of rows.
    pub placeholder: Option<String>,
    pub input_visible: bool,
    pub message: String,
}

/// Returns the notes list snapshot, optionally replacing the live
/// search query first.
///
/// # FFI contract
/// - Sync call; filter recomputes against the full collection.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(query: Option<String>) -> NotesListResponse {
    match with_app(|app| {
        if let Some(query) = query {
            app.notes_view.set_query(query);
        }
        notes_snapshot(app, String::new())
    }) {
        Ok(response) => response,
        Err(err) => NotesListResponse {
            items: Vec::new(),
            selection_mode: false,
            selected_count: 0,
            message: format!("notes_list failed: {err}"),
        },
    }
}

/// Saves a new note from the creation form.
///
/// # FFI contract
/// - Sync call; validation failure returns `ok = false` with the
///   user-visible message and adds nothing.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(title: String, description: String) -> ActionResponse {
    match with_app(|app| NoteForm::new(title, description).save(&mut app.notes)) {
        Ok(Ok(note)) => ActionResponse::success("Note created.", Some(note.id.to_string())),
        Ok(Err(err)) => ActionResponse::failure(err.to_string()),
        Err(err) => ActionResponse::failure(format!("note_add failed: {err}")),
    }
}

/// Short press on a notes-list row.
///
/// Outside selection mode the response carries the full note value for
/// the detail screen; inside it the row's selection flag toggles.
///
/// # FFI contract
/// - Sync call. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_press(id: String) -> NotePressResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(err) => return press_failure(err),
    };

    match with_app(|app| {
        let outcome = app.notes_view.press(&app.notes, parsed);
        let open_note = match outcome {
            Some(PressOutcome::OpenDetail(note)) => Some(NoteItem {
                id: note.id.to_string(),
                title: note.title,
                description: note.description,
                selected: false,
            }),
            Some(PressOutcome::SelectionToggled { .. }) | None => None,
        };
        NotePressResponse {
            open_note,
            selection_mode: app.notes_view.selection_mode(),
            selected_count: app.notes_view.selected_count() as u32,
            message: String::new(),
        }
    }) {
        Ok(response) => response,
        Err(err) => press_failure(format!("note_press failed: {err}")),
    }
}

/// Long press on a notes-list row: enters selection mode and selects
/// that row.
///
/// # FFI contract
/// - Sync call. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_long_press(id: String) -> NotePressResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(err) => return press_failure(err),
    };

    match with_app(|app| {
        app.notes_view.long_press(parsed);
        NotePressResponse {
            open_note: None,
            selection_mode: app.notes_view.selection_mode(),
            selected_count: app.notes_view.selected_count() as u32,
            message: String::new(),
        }
    }) {
        Ok(response) => response,
        Err(err) => press_failure(format!("note_long_press failed: {err}")),
    }
}

/// Returns the confirmation dialog content for the pending bulk delete.
///
/// # FFI contract
/// - Sync call; `ok = false` when nothing is selected.
/// - Cancelling on the host side needs no follow-up call.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete_prompt() -> DeletePromptResponse {
    match with_app(|app| app.notes_view.delete_prompt()) {
        Ok(Some(prompt)) => DeletePromptResponse {
            ok: true,
            count: prompt.count as u32,
            message: prompt.message(),
        },
        Ok(None) => DeletePromptResponse {
            ok: false,
            count: 0,
            message: String::new(),
        },
        Err(err) => DeletePromptResponse {
            ok: false,
            count: 0,
            message: format!("notes_delete_prompt failed: {err}"),
        },
    }
}

/// Confirmed bulk delete of the current selection.
///
/// # FFI contract
/// - Sync call; clears the selection and leaves selection mode.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete_selected() -> ActionResponse {
    match with_app(|app| {
        let App {
            notes, notes_view, ..
        } = app;
        notes_view.confirm_delete(notes)
    }) {
        Ok(removed) => ActionResponse::success(format!("Deleted {removed} note(s)."), None),
        Err(err) => ActionResponse::failure(format!("notes_delete_selected failed: {err}")),
    }
}

/// Returns the confirmation dialog text for the detail-screen delete.
///
/// # FFI contract
/// - Sync call, pure. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete_prompt() -> String {
    DELETE_PROMPT.to_string()
}

/// Confirmed single delete from the detail screen.
///
/// # FFI contract
/// - Sync call; deleting an already-removed note is a no-op.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(err) => return ActionResponse::failure(err),
    };

    match with_app(|app| {
        if let Some(note) = app.notes.get(parsed).cloned() {
            NoteDetail::new(note).confirm_delete(&mut app.notes);
        }
    }) {
        Ok(()) => ActionResponse::success("Note deleted.", Some(id)),
        Err(err) => ActionResponse::failure(format!("note_delete failed: {err}")),
    }
}

/// Formats the share-sheet payload for one note.
///
/// The host invokes the platform share capability itself and logs any
/// failure there; nothing is surfaced as an error dialog.
///
/// # FFI contract
/// - Sync call, pure. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_share_payload(title: String, description: String) -> String {
    share_payload_inner(&title, &description)
}

/// Returns the to-do screen snapshot.
///
/// # FFI contract
/// - Sync call. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_app(|app| todo_snapshot(app, String::new())) {
        Ok(response) => response,
        Err(err) => todo_failure(format!("todo_list failed: {err}")),
    }
}

/// Reveals the add-task input row.
///
/// # FFI contract
/// - Sync call. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_open_input() -> TodoListResponse {
    match with_app(|app| {
        app.todo_view.show_input();
        todo_snapshot(app, String::new())
    }) {
        Ok(response) => response,
        Err(err) => todo_failure(format!("todo_open_input failed: {err}")),
    }
}

/// Submits the add-task input row.
///
/// # FFI contract
/// - Sync call; validation failure returns `ok = false` with the
///   user-visible message and leaves the input row open.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String) -> ActionResponse {
    match with_app(|app| {
        let App {
            tasks, todo_view, ..
        } = app;
        todo_view.set_draft(text);
        todo_view.submit(tasks)
    }) {
        Ok(Ok(id)) => ActionResponse::success("Task created.", Some(id.to_string())),
        Ok(Err(err)) => ActionResponse::failure(err.to_string()),
        Err(err) => ActionResponse::failure(format!("task_add failed: {err}")),
    }
}

/// Toggles a task's completion flag.
///
/// # FFI contract
/// - Sync call; unknown ids are a no-op.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(err) => return ActionResponse::failure(err),
    };

    match with_app(|app| app.tasks.toggle_completion(parsed)) {
        Ok(true) => ActionResponse::success("Task updated.", Some(id)),
        Ok(false) => ActionResponse::success("No matching task.", Some(id)),
        Err(err) => ActionResponse::failure(format!("task_toggle failed: {err}")),
    }
}

/// Deletes one task.
///
/// # FFI contract
/// - Sync call; unknown ids are a no-op.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: String) -> ActionResponse {
    let parsed = match parse_id(&id) {
        Ok(parsed) => parsed,
        Err(err) => return ActionResponse::failure(err),
    };

    match with_app(|app| app.tasks.delete_task(parsed)) {
        Ok(true) => ActionResponse::success("Task deleted.", Some(id)),
        Ok(false) => ActionResponse::success("No matching task.", Some(id)),
        Err(err) => ActionResponse::failure(format!("task_delete failed: {err}")),
    }
}

/// Blocks until every enqueued snapshot write has been applied.
///
/// Durability completion signal for hosts that want to await the mirror
/// (e.g. on app backgrounding); regular mutation flows never need it.
///
/// # FFI contract
/// - Sync call; may block briefly. Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn persistence_flush() -> ActionResponse {
    match with_app(|app| app.persister.flush()) {
        Ok(()) => ActionResponse::success("Flushed.", None),
        Err(err) => ActionResponse::failure(format!("persistence_flush failed: {err}")),
    }
}

fn notes_snapshot(app: &App, message: String) -> NotesListResponse {
    let items = app
        .notes_view
        .visible(app.notes.notes())
        .into_iter()
        .map(|note| NoteItem {
            id: note.id.to_string(),
            title: note.title.clone(),
            description: note.description.clone(),
            selected: app.notes_view.is_selected(note.id),
        })
        .collect();

    NotesListResponse {
        items,
        selection_mode: app.notes_view.selection_mode(),
        selected_count: app.notes_view.selected_count() as u32,
        message,
    }
}

fn todo_snapshot(app: &App, message: String) -> TodoListResponse {
    let items = todo::rows(&app.tasks)
        .into_iter()
        .map(|row| TaskItem {
            id: row.id.to_string(),
            text: row.text,
            completed: row.completed,
        })
        .collect();

    TodoListResponse {
        items,
        placeholder: todo::placeholder(&app.tasks).map(str::to_string),
        input_visible: app.todo_view.input_visible(),
        message,
    }
}

fn press_failure(message: String) -> NotePressResponse {
    NotePressResponse {
        open_note: None,
        selection_mode: false,
        selected_count: 0,
        message,
    }
}

fn todo_failure(message: String) -> TodoListResponse {
    TodoListResponse {
        items: Vec::new(),
        placeholder: None,
        input_visible: false,
        message,
    }
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid id `{raw}`"))
}

fn resolve_app_db_path() -> PathBuf {
    APP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("JOT_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(APP_DB_FILE_NAME)
        })
        .clone()
}

fn with_app<T>(f: impl FnOnce(&mut App) -> T) -> Result<T, String> {
    let cell = APP.get_or_try_init(init_app)?;
    let mut app = cell
        .lock()
        .map_err(|_| "application state lock poisoned".to_string())?;
    Ok(f(&mut app))
}

fn init_app() -> Result<Mutex<App>, String> {
    let db_path = resolve_app_db_path();

    // One connection loads the startup snapshots, a second moves into
    // the persistence worker for the lifetime of the process.
    let reader =
        SqliteKeyValueStore::open(&db_path).map_err(|err| format!("app DB open failed: {err}"))?;
    let writer =
        SqliteKeyValueStore::open(&db_path).map_err(|err| format!("app DB open failed: {err}"))?;
    let persister = Persister::spawn(Box::new(writer))
        .map_err(|err| format!("persistence worker spawn failed: {err}"))?;

    let notes = NotesStore::load(&reader, persister.handle());
    let tasks = TasksStore::load(&reader, persister.handle());

    Ok(Mutex::new(App {
        notes,
        tasks,
        notes_view: NotesListState::new(),
        todo_view: TodoState::new(),
        persister,
    }))
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, note_add, note_delete, note_delete_prompt, note_long_press,
        note_press, note_share_payload, notes_delete_prompt, notes_delete_selected, notes_list,
        persistence_flush, ping, task_add, task_delete, task_toggle, todo_list, todo_open_input,
    };
    use jot_core::storage::{KeyValueStore, SqliteKeyValueStore};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Serializes the tests that depend on selection-mode state; presses
    // behave differently while another test holds the mode open.
    static SELECTION_FLOW: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn note_add_rejects_whitespace_title() {
        let response = note_add(" ".to_string(), "described".to_string());
        assert!(!response.ok);
        assert_eq!(response.message, "Please enter both title and description");
    }

    #[test]
    fn created_note_shows_up_in_the_filtered_list() {
        let token = unique_token("ffi-notes-list");
        let created = note_add(token.clone(), "body".to_string());
        assert!(created.ok, "{}", created.message);
        let created_id = created.id.clone().expect("created note should return id");

        let response = notes_list(Some(token));
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, created_id);
        assert_eq!(response.items[0].description, "body");
    }

    #[test]
    fn press_outside_selection_mode_opens_the_detail() {
        let _guard = SELECTION_FLOW
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let token = unique_token("ffi-press");
        let created = note_add(token.clone(), "detail body".to_string());
        assert!(created.ok, "{}", created.message);
        let id = created.id.expect("created note should return id");

        let response = note_press(id.clone());
        let opened = response.open_note.expect("press should open the detail");
        assert_eq!(opened.id, id);
        assert_eq!(opened.title, token);
        assert!(!response.selection_mode);

        // Cleanup so later runs don't accumulate fixtures.
        assert!(note_delete(id).ok);
    }

    #[test]
    fn selection_flow_deletes_the_selected_notes() {
        let _guard = SELECTION_FLOW
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let token = unique_token("ffi-selection");
        let a = note_add(format!("{token} a"), "1".to_string())
            .id
            .expect("note a id");
        let b = note_add(format!("{token} b"), "2".to_string())
            .id
            .expect("note b id");

        let after_long = note_long_press(a);
        assert!(after_long.selection_mode);
        assert_eq!(after_long.selected_count, 1);

        let after_press = note_press(b);
        assert!(after_press.open_note.is_none());
        assert_eq!(after_press.selected_count, 2);

        let prompt = notes_delete_prompt();
        assert!(prompt.ok);
        assert_eq!(prompt.count, 2);
        assert!(prompt.message.contains("delete 2 notes"));

        let deleted = notes_delete_selected();
        assert!(deleted.ok, "{}", deleted.message);

        let remaining = notes_list(Some(token));
        assert!(remaining.items.is_empty());
        assert!(!remaining.selection_mode);
    }

    #[test]
    fn task_lifecycle_toggles_and_deletes() {
        let token = unique_token("ffi-task");
        let created = task_add(token.clone());
        assert!(created.ok, "{}", created.message);
        let id = created.id.expect("created task should return id");

        let listed = todo_list();
        let row = listed
            .items
            .iter()
            .find(|item| item.id == id)
            .expect("created task should be listed");
        assert_eq!(row.text, token);
        assert!(!row.completed);
        assert_eq!(listed.placeholder, None);

        assert!(task_toggle(id.clone()).ok);
        let toggled = todo_list();
        assert!(
            toggled
                .items
                .iter()
                .find(|item| item.id == id)
                .expect("task should still be listed")
                .completed
        );

        assert!(task_delete(id.clone()).ok);
        let after_delete = todo_list();
        assert!(after_delete.items.iter().all(|item| item.id != id));
    }

    #[test]
    fn task_add_rejects_blank_text() {
        let response = task_add("   ".to_string());
        assert!(!response.ok);
        assert_eq!(response.message, "Task cannot be empty");
    }

    #[test]
    fn todo_open_input_reveals_the_input_row() {
        let response = todo_open_input();
        assert!(response.input_visible);
    }

    #[test]
    fn note_delete_prompt_matches_the_dialog_text() {
        assert_eq!(
            note_delete_prompt(),
            "Are you sure you want to delete this note?"
        );
    }

    #[test]
    fn share_payload_formats_title_and_details() {
        let payload = note_share_payload("Trip".to_string(), "pack early".to_string());
        assert_eq!(payload, "Note Title: Trip\n\nNote Details: pack early");
    }

    #[test]
    fn flushed_mutations_reach_the_storage_file() {
        let token = unique_token("ffi-durability");
        let created = task_add(token.clone());
        assert!(created.ok, "{}", created.message);

        assert!(persistence_flush().ok);

        let store =
            SqliteKeyValueStore::open(super::resolve_app_db_path()).expect("open storage file");
        let blob = store
            .get("tasks")
            .expect("read tasks entry")
            .expect("tasks entry should exist");
        assert!(blob.contains(&token));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
