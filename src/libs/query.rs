//! Filtering and ordering of task views.
//!
//! Every function here is pure: it borrows tasks and returns a new vector of
//! references, leaving the store's insertion order alone.

use super::task::{Category, CategoryFilter, Task, ViewMode};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Tasks whose `completed` flag equals `completed`, in store order.
pub fn by_status(tasks: &[Task], completed: bool) -> Vec<&Task> {
    tasks.iter().filter(|task| task.completed == completed).collect()
}

/// Tasks in `filter`'s category, or every task for [`CategoryFilter::All`].
pub fn by_category(tasks: &[Task], filter: CategoryFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task.category)).collect()
}

/// Status filter from `view_mode` composed with a category filter.
pub fn apply_view_filter(tasks: &[Task], view_mode: ViewMode, filter: CategoryFilter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| match view_mode {
            ViewMode::AllTasks => true,
            ViewMode::PendingOnly => !task.completed,
            ViewMode::CompletedOnly => task.completed,
        })
        .filter(|task| filter.matches(task.category))
        .collect()
}

/// Orders tasks for display: pending first, then higher priority, then
/// earlier due date with undated tasks last.
///
/// The sort is stable, so tasks with equal keys keep their input order.
pub fn sort_for_display<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    // `None` has to land after every real date; (is_none, date) gives that.
    sorted.sort_by_key(|task| (task.completed, Reverse(task.priority.rank()), task.due_date.is_none(), task.due_date));
    sorted
}

/// Categories that occur at least once, for populating the category filter.
pub fn distinct_categories(tasks: &[Task]) -> BTreeSet<Category> {
    tasks.iter().map(|task| task.category).collect()
}

/// Filter choices offered to the user: "All" followed by the present categories.
pub fn category_choices(tasks: &[Task]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(distinct_categories(tasks).into_iter().map(CategoryFilter::Only))
        .collect()
}
