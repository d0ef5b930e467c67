//! Task entity and the closed vocabularies used to classify tasks.
//!
//! A [`Task`] is the only record the application manages. Its category and
//! priority come from fixed enumerations, its due date is a calendar date
//! without time, and its timestamps are stored at minute resolution.
//!
//! ## String Formats
//!
//! Dates and timestamps stay typed inside the application and are turned
//! into text only at the edges (export and rendering):
//! - **Due date**: `YYYY-MM-DD` ([`DATE_FORMAT`])
//! - **Timestamps**: `YYYY-MM-DD HH:MM` ([`TIMESTAMP_FORMAT`])
//!
//! ## Usage
//!
//! ```rust
//! use tasklist::libs::task::{Category, Priority};
//!
//! let category: Category = "work".parse().unwrap();
//! assert_eq!(category, Category::Work);
//! assert!(Priority::Urgent > Priority::High);
//! ```

use super::error::ValidationError;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Display and export format of due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display and export format of `created_at` / `completed_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single todo item.
///
/// Tasks are created only through [`TaskStore::add`](super::store::TaskStore::add),
/// which guarantees a non-empty trimmed title and a fresh id. `completed` and
/// `completed_at` always move together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Input for creating a task, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: &str, description: &str, category: Category, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.to_string(),
            category,
            priority,
            due_date,
        }
    }
}

/// Fixed set of task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
    Learning,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Health,
        Category::Learning,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Learning => "Learning",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Task priority, ordered `Low < Medium < High < Urgent`.
///
/// The derived ordering follows declaration order, so comparing two
/// priorities directly gives the same answer as comparing their [`rank`](Priority::rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    /// Sort weight: Urgent = 4 down to Low = 1.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Colour marker shown next to the priority name.
    pub fn marker(&self) -> &'static str {
        match self {
            Priority::Urgent => "🔴",
            Priority::High => "🟠",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownPriority(s.to_string()))
    }
}

/// Status filter applied before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    #[default]
    AllTasks,
    PendingOnly,
    CompletedOnly,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::AllTasks, ViewMode::PendingOnly, ViewMode::CompletedOnly];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::AllTasks => "All Tasks",
            ViewMode::PendingOnly => "Pending Only",
            ViewMode::CompletedOnly => "Completed Only",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();
        match normalized.as_str() {
            "all" | "alltasks" => Ok(ViewMode::AllTasks),
            "pending" | "pendingonly" => Ok(ViewMode::PendingOnly),
            "completed" | "completedonly" => Ok(ViewMode::CompletedOnly),
            _ => Err(ValidationError::UnknownViewMode(s.to_string())),
        }
    }
}

/// Category filter with the "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_matches_rank() {
        let mut sorted = Priority::ALL;
        sorted.sort();
        assert_eq!(sorted, [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent]);
        assert!(Priority::ALL.windows(2).all(|w| w[0].rank() < w[1].rank()));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SHOPPING".parse::<Category>().unwrap(), Category::Shopping);
        assert_eq!(" urgent ".parse::<Priority>().unwrap(), Priority::Urgent);
        assert_eq!("Pending Only".parse::<ViewMode>().unwrap(), ViewMode::PendingOnly);
        assert_eq!("completed".parse::<ViewMode>().unwrap(), ViewMode::CompletedOnly);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!(matches!("Hobby".parse::<Category>(), Err(ValidationError::UnknownCategory(_))));
        assert!(matches!("Critical".parse::<Priority>(), Err(ValidationError::UnknownPriority(_))));
        assert!(matches!("archived".parse::<ViewMode>(), Err(ValidationError::UnknownViewMode(_))));
    }

    #[test]
    fn test_category_filter_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("work".parse::<CategoryFilter>().unwrap(), CategoryFilter::Only(Category::Work));
        assert!(CategoryFilter::All.matches(Category::Other));
        assert!(!CategoryFilter::Only(Category::Work).matches(Category::Health));
    }
}
