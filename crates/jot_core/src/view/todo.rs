//! To-do screen state: input-row visibility and row projection.

use crate::model::task::TaskId;
use crate::store::tasks::{TaskError, TasksStore};

/// Message rendered instead of rows when the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Add a new one!";

/// One rendered list row.
///
/// `completed` drives the struck-through text style on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Projects the store into rows, newest first.
pub fn rows(store: &TasksStore) -> Vec<TaskRow> {
    store
        .tasks()
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        })
        .collect()
}

/// Returns the empty-state placeholder when there are no rows.
pub fn placeholder(store: &TasksStore) -> Option<&'static str> {
    store.is_empty().then_some(EMPTY_PLACEHOLDER)
}

/// Transient state of the to-do screen.
#[derive(Debug, Default)]
pub struct TodoState {
    input_visible: bool,
    draft: String,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_visible(&self) -> bool {
        self.input_visible
    }

    /// The add affordance reveals the input row.
    pub fn show_input(&mut self) {
        self.input_visible = true;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submits the draft as a new task.
    ///
    /// On success the input row hides and the draft clears; on validation
    /// failure both stay put so the user can correct and retry.
    pub fn submit(&mut self, store: &mut TasksStore) -> Result<TaskId, TaskError> {
        let id = store.add_task(&self.draft)?;
        self.draft.clear();
        self.input_visible = false;
        Ok(id)
    }
}
