//! One user session: a task store plus the current view selection.
//!
//! `Session` is the surface the command layer talks to. It owns exactly one
//! [`TaskStore`]; dropping the session drops every task. Each method is a
//! single synchronous step that either fully applies or leaves the store as
//! it was.
//!
//! ## Entry Points
//!
//! | Method | Effect |
//! |---|---|
//! | [`add_task`](Session::add_task) | validate and append a task |
//! | [`complete_task`](Session::complete_task) / [`uncomplete_task`](Session::uncomplete_task) | toggle completion |
//! | [`delete_task`](Session::delete_task) / [`clear_completed_tasks`](Session::clear_completed_tasks) | remove tasks |
//! | [`list_tasks`](Session::list_tasks) | filtered view, store order |
//! | [`visible_tasks`](Session::visible_tasks) | current filters, display order |
//! | [`compute_stats`](Session::compute_stats) | totals and completion rate |
//! | [`export_json`](Session::export_json) / [`export_csv`](Session::export_csv) | serialized snapshot |

use super::error::ValidationError;
use super::export::{to_csv, to_json};
use super::query::{apply_view_filter, category_choices, sort_for_display};
use super::stats::{stats, Stats};
use super::store::TaskStore;
use super::task::{Category, CategoryFilter, NewTask, Priority, Task, ViewMode};
use anyhow::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: TaskStore,
    view_mode: ViewMode,
    category_filter: CategoryFilter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        category: Category,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, ValidationError> {
        self.store.add(NewTask::new(title, description, category, priority, due_date))
    }

    pub fn complete_task(&mut self, id: u32) -> bool {
        self.store.complete(id)
    }

    pub fn uncomplete_task(&mut self, id: u32) -> bool {
        self.store.uncomplete(id)
    }

    pub fn delete_task(&mut self, id: u32) -> bool {
        self.store.remove(id)
    }

    pub fn clear_completed_tasks(&mut self) -> usize {
        self.store.clear_completed()
    }

    /// Tasks passing the given filters, in store order.
    pub fn list_tasks(&self, view_mode: ViewMode, category: CategoryFilter) -> Vec<&Task> {
        apply_view_filter(self.store.tasks(), view_mode, category)
    }

    /// Tasks passing the session's current filters, sorted for display.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        sort_for_display(self.list_tasks(self.view_mode, self.category_filter))
    }

    pub fn compute_stats(&self) -> Stats {
        stats(self.store.tasks())
    }

    pub fn export_json(&self) -> Result<String> {
        to_json(self.store.tasks())
    }

    pub fn export_csv(&self) -> Result<String> {
        to_csv(self.store.tasks())
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    /// "All" plus every category currently in use.
    pub fn category_choices(&self) -> Vec<CategoryFilter> {
        category_choices(self.store.tasks())
    }

    /// Adds the three quick-start example tasks and returns them.
    pub fn seed_examples(&mut self, today: NaiveDate) -> Vec<Task> {
        let examples = [
            NewTask::new("Buy groceries", "Milk, bread, fruits", Category::Shopping, Priority::Medium, None),
            NewTask::new(
                "Finish project report",
                "Complete the quarterly analysis",
                Category::Work,
                Priority::High,
                Some(today),
            ),
            NewTask::new("Morning workout", "30 minutes cardio exercise", Category::Health, Priority::Medium, None),
        ];

        examples.into_iter().filter_map(|example| self.store.add(example).ok()).collect()
    }
}
