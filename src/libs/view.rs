//! Table rendering for the task board and the statistics block.

use super::formatter::{due_status, format_timestamp};
use super::stats::Stats;
use super::task::Task;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the task table; `today` drives the due-date column.
    pub fn tasks_table(tasks: &[&Task], today: NaiveDate) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "", "TITLE", "PRIORITY", "CATEGORY", "DUE", "CREATED"]);
        for task in tasks {
            let title = if task.description.is_empty() {
                task.title.clone()
            } else {
                format!("{}\n{}", task.title, task.description)
            };
            let check = if task.completed { "✅" } else { "⬜" };
            let status = due_status(task.due_date, today);
            table.add_row(row![
                task.id,
                check,
                title,
                format!("{} {}", task.priority.marker(), task.priority),
                format!("📁 {}", task.category),
                format!("{} {}", status.marker(), status),
                format!("🕐 {}", format_timestamp(&task.created_at))
            ]);
        }

        table
    }

    pub fn tasks(tasks: &[&Task], today: NaiveDate) {
        Self::tasks_table(tasks, today).printstd();
    }

    pub fn stats_table(stats: &Stats) -> Table {
        let mut table = Table::new();

        table.add_row(row!["Total Tasks", stats.total]);
        table.add_row(row!["Completed", stats.completed]);
        table.add_row(row!["Pending", stats.pending]);
        if let Some(rate) = stats.completion_rate {
            table.add_row(row!["Completion Rate", format!("{:.1}%", rate)]);
        }

        table
    }

    pub fn stats(stats: &Stats) {
        Self::stats_table(stats).printstd();
    }
}
