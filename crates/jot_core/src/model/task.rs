//! Task domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// A persisted to-do entry with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for toggling and deletion.
    pub id: TaskId,
    /// Task text, stored trimmed.
    pub text: String,
    /// Completion state, toggled in place.
    pub completed: bool,
}

impl Task {
    /// Creates a new open task with a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an open task with a caller-provided stable ID.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_tasks_start_open() {
        assert!(!Task::new("buy milk").completed);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut task = Task::new("water plants");
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }
}
