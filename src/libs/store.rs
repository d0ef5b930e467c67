//! In-memory task store owned by a single session.
//!
//! The store keeps tasks in insertion order together with a monotonic id
//! counter that starts at 1 and is never rewound, so ids of deleted tasks
//! are never handed out again. Nothing is persisted: the store lives exactly
//! as long as the session that created it.
//!
//! ## Mutation Rules
//!
//! - [`TaskStore::add`] is the only way to create a task and the only
//!   operation that can fail (blank title). A rejected add leaves both the
//!   collection and the counter untouched.
//! - [`TaskStore::complete`] / [`TaskStore::uncomplete`] toggle `completed`
//!   and `completed_at` together.
//! - [`TaskStore::remove`] and [`TaskStore::clear_completed`] delete tasks.
//!
//! Unknown ids are not errors. Every id-based operation reports whether it
//! changed anything and otherwise does nothing.
//!
//! ## Usage
//!
//! ```rust
//! use tasklist::libs::store::TaskStore;
//! use tasklist::libs::task::{Category, NewTask, Priority};
//!
//! let mut store = TaskStore::new();
//! let task = store
//!     .add(NewTask::new("Buy milk", "", Category::Shopping, Priority::Medium, None))
//!     .unwrap();
//! assert_eq!(task.id, 1);
//! assert!(store.complete(task.id));
//! ```

use super::error::ValidationError;
use super::task::{NewTask, Task};
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::debug;

/// Source of "now" for `created_at` and `completed_at`.
pub type Clock = fn() -> NaiveDateTime;

/// Local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Drops seconds and sub-seconds so stored timestamps have minute resolution.
pub fn truncate_to_minute(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.date().and_hms_opt(timestamp.hour(), timestamp.minute(), 0).unwrap_or(timestamp)
}

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
    clock: Clock,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_clock(local_now)
    }

    /// Creates an empty store that reads time from `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    fn now(&self) -> NaiveDateTime {
        truncate_to_minute((self.clock)())
    }

    /// Validates and appends a new pending task, returning a copy of it.
    ///
    /// Title and description are trimmed. A title that is empty after
    /// trimming is rejected with [`ValidationError::EmptyTitle`] before any
    /// state changes.
    pub fn add(&mut self, new_task: NewTask) -> Result<Task, ValidationError> {
        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            description: new_task.description.trim().to_string(),
            category: new_task.category,
            priority: new_task.priority,
            due_date: new_task.due_date,
            completed: false,
            created_at: self.now(),
            completed_at: None,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());

        debug!(id = task.id, category = %task.category, priority = %task.priority, "task added");
        Ok(task)
    }

    /// Removes the task with `id`. Returns `false` when no such task exists.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        debug!(id, removed, "task remove");
        removed
    }

    /// Removes every completed task and returns how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_pending);
        let cleared = before - self.tasks.len();
        debug!(cleared, "completed tasks cleared");
        cleared
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Marks a pending task completed and stamps `completed_at`.
    ///
    /// Returns `false` if the task is missing or already completed; in that
    /// case the task (including its original `completed_at`) is untouched.
    pub fn complete(&mut self, id: u32) -> bool {
        let now = self.now();
        match self.find_mut(id) {
            Some(task) if !task.completed => {
                task.completed = true;
                task.completed_at = Some(now);
                debug!(id, "task completed");
                true
            }
            _ => false,
        }
    }

    /// Returns a completed task to pending and clears `completed_at`.
    pub fn uncomplete(&mut self, id: u32) -> bool {
        match self.find_mut(id) {
            Some(task) if task.completed => {
                task.completed = false;
                task.completed_at = None;
                debug!(id, "task reopened");
                true
            }
            _ => false,
        }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The id the next successful [`add`](TaskStore::add) will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
