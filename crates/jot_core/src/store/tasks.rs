//! Tasks collection store.
//!
//! # Responsibility
//! - Own the in-memory to-do list and mirror it to storage after every
//!   mutation.
//!
//! # Invariants
//! - New tasks prepend at the front; insertion order is preserved on
//!   disk.
//! - Empty (after trimming) task text is rejected before any state
//!   changes.
//! - Toggle and delete are no-ops for unknown ids.

use crate::model::task::{Task, TaskId};
use crate::storage::{KeyValueStore, TASKS_KEY};
use crate::store::persister::PersistHandle;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-visible validation failure for the add-task flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    /// Submitted text was empty or whitespace-only.
    EmptyText,
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Task cannot be empty"),
        }
    }
}

impl Error for TaskError {}

/// In-memory tasks collection with a background persistence mirror.
pub struct TasksStore {
    tasks: Vec<Task>,
    persist: PersistHandle,
}

impl TasksStore {
    /// Loads the persisted collection once, at startup.
    ///
    /// Failures degrade to an empty collection, logged and non-fatal.
    pub fn load(kv: &dyn KeyValueStore, persist: PersistHandle) -> Self {
        let tasks = match kv.get(TASKS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => {
                    info!(
                        "event=tasks_load module=store status=ok count={}",
                        tasks.len()
                    );
                    tasks
                }
                Err(err) => {
                    warn!(
                        "event=tasks_load module=store status=error stage=decode error={}",
                        err
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=tasks_load module=store status=error stage=read error={}",
                    err
                );
                Vec::new()
            }
        };

        Self { tasks, persist }
    }

    /// Returns the full collection, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creates an open task from trimmed text and prepends it.
    ///
    /// # Errors
    /// - [`TaskError::EmptyText`] when the trimmed text is empty; nothing
    ///   is added and nothing is persisted.
    pub fn add_task(&mut self, text: &str) -> Result<TaskId, TaskError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let task = Task::new(trimmed);
        let id = task.id;
        self.tasks.insert(0, task);
        self.persist_snapshot();
        Ok(id)
    }

    /// Flips `completed` on the matching task.
    ///
    /// Returns whether a task changed; unknown ids are a no-op.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                self.persist_snapshot();
                true
            }
            None => false,
        }
    }

    /// Removes the matching task.
    ///
    /// Returns whether a task was removed; unknown ids are a no-op.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist_snapshot();
        true
    }

    fn persist_snapshot(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(payload) => self.persist.enqueue(TASKS_KEY, payload),
            Err(err) => {
                error!(
                    "event=persist module=store status=error key={} stage=encode error={}",
                    TASKS_KEY, err
                );
            }
        }
    }
}
