//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent between the interactive session, the quick-start command and
//! error output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' added successfully!", id, title),
            Message::TaskCompleted(title) => format!("Task '{}' completed!", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as pending!", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted!", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskUnchanged(id) => format!("Task {} is already in that state.", id),
            Message::TitleRequired => "Please enter a task title".to_string(),
            Message::CompletedTasksCleared(count) => format!("Completed tasks cleared! ({} removed)", count),
            Message::NoCompletedTasks => "There are no completed tasks to clear.".to_string(),
            Message::TasksHeader(count) => format!("📋 Tasks ({})", count),
            Message::NoTasksMatchFilters => "📝 No tasks match your current filters.".to_string(),
            Message::WelcomeHeader => "👋 Welcome to Your Todo List!".to_string(),
            Message::WelcomeGettingStarted => [
                "🚀 Getting Started:",
                "  1. Add a task",
                "  2. Set priorities to focus on what matters most",
                "  3. Organize by categories to keep things tidy",
                "  4. Mark tasks complete when you're done",
            ]
            .join("\n"),
            Message::QuickstartSeeded(count) => format!("{} example tasks added.", count),

            // === VIEW MESSAGES ===
            Message::ViewModeChanged(mode) => format!("View mode: {}", mode),
            Message::CategoryFilterChanged(category) => format!("Category filter: {}", category),
            Message::StatsHeader => "🔍 Stats".to_string(),
            Message::CurrentFilters(mode, category) => format!("Showing: {} | Category: {}", mode, category),

            // === SESSION MESSAGES ===
            Message::SessionStarted => "✅ Todo List - stay organized and get things done".to_string(),
            Message::SessionEnded(count) => {
                if *count == 0 {
                    "Session ended.".to_string()
                } else {
                    format!("Session ended. {} tasks were discarded.", count)
                }
            }

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting tasks in {} format...", format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults restored".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseFailed(path, error) => format!("Failed to parse configuration file {}: {}", path, error),
            Message::ConfigModuleDefaults => "Task defaults".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),
            Message::ConfigModuleSession => "Session settings".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidDate(input) => format!("Invalid date '{}'. Use YYYY-MM-DD or 'today'.", input),
            Message::DueDateInPast(date) => format!("Due date {} is in the past.", date),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task Title*".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due Date (YYYY-MM-DD, 'today' or empty)".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectTask => "Select task".to_string(),
            Message::PromptViewMode => "View Mode".to_string(),
            Message::PromptCategoryFilter => "Filter by Category".to_string(),
            Message::PromptExportFormat => "Export format".to_string(),
            Message::PromptExportDirectory => "Export directory (empty for current directory)".to_string(),
            Message::PromptSeedExamples => "Start each session with example tasks?".to_string(),
            Message::PromptSelectModules => "Select settings to configure (space to select, enter to confirm)".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmClearCompleted(count) => format!("Remove {} completed tasks?", count),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
