//! Interactive todo session.
//!
//! Opens a menu loop over one in-memory [`Session`]. Every menu action maps to
//! exactly one session operation; after it runs, the board (filtered and
//! sorted task table plus statistics) is printed again. Quitting ends the
//! session and discards its tasks.

use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        formatter::{format_date, parse_due_date},
        messages::Message,
        session::Session,
        task::{Category, Priority, Task, ViewMode},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fmt;
use tracing::debug;

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Start the session with the quick-start example tasks
    #[arg(long)]
    examples: bool,

    /// Initial view mode
    #[arg(short, long, value_enum, default_value = "all-tasks")]
    view: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Complete,
    Undo,
    Delete,
    ChangeView,
    ChangeCategory,
    ClearCompleted,
    Export(ExportFormat),
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Add => "➕ Add task",
            Action::Complete => "✅ Complete task",
            Action::Undo => "↩️ Undo completion",
            Action::Delete => "🗑️ Delete task",
            Action::ChangeView => "👁️ Change view mode",
            Action::ChangeCategory => "📁 Filter by category",
            Action::ClearCompleted => "🧹 Clear completed tasks",
            Action::Export(ExportFormat::Json) => "📋 Export as JSON",
            Action::Export(ExportFormat::Csv) => "📊 Export as CSV",
            Action::Quit => "🚪 Quit",
        };
        f.write_str(label)
    }
}

/// Actions that make sense for the current store contents.
///
/// The export entries list `preferred_format` first.
fn available_actions(session: &Session, preferred_format: ExportFormat) -> Vec<Action> {
    let stats = session.compute_stats();
    let mut actions = vec![Action::Add];

    if stats.pending > 0 {
        actions.push(Action::Complete);
    }
    if stats.completed > 0 {
        actions.push(Action::Undo);
    }
    if stats.total > 0 {
        actions.extend([Action::Delete, Action::ChangeView, Action::ChangeCategory]);
    }
    if stats.completed > 0 {
        actions.push(Action::ClearCompleted);
    }
    if stats.total > 0 {
        actions.push(Action::Export(preferred_format));
        actions.extend(
            [ExportFormat::Json, ExportFormat::Csv]
                .into_iter()
                .filter(|format| *format != preferred_format)
                .map(Action::Export),
        );
    }
    actions.push(Action::Quit);
    actions
}

pub fn cmd(args: SessionArgs) -> Result<()> {
    let config = Config::read()?;
    let today = Local::now().date_naive();

    let mut session = Session::new();
    session.set_view_mode(args.view);
    if args.examples || config.session.seed_examples {
        let seeded = session.seed_examples(today);
        msg_info!(Message::QuickstartSeeded(seeded.len()));
    }

    msg_print!(Message::SessionStarted, true);

    loop {
        print_board(&session, today);

        let actions = available_actions(&session, config.export.format);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&actions)
            .default(0)
            .interact()?;

        let action = actions[selection];
        debug!(?action, "session action");
        match action {
            Action::Add => handle_add(&mut session, &config, today)?,
            Action::Complete => handle_complete(&mut session)?,
            Action::Undo => handle_undo(&mut session)?,
            Action::Delete => handle_delete(&mut session)?,
            Action::ChangeView => handle_view_mode(&mut session)?,
            Action::ChangeCategory => handle_category_filter(&mut session)?,
            Action::ClearCompleted => handle_clear_completed(&mut session)?,
            Action::Export(format) => handle_export(&session, &config, format),
            Action::Quit => break,
        }
    }

    msg_print!(Message::SessionEnded(session.store().len()));
    Ok(())
}

/// Prints the current view: welcome text for an empty store, otherwise the
/// filtered and sorted task table followed by statistics.
pub fn print_board(session: &Session, today: NaiveDate) {
    if session.store().is_empty() {
        msg_print!(Message::WelcomeHeader, true);
        msg_print!(Message::WelcomeGettingStarted);
        return;
    }

    msg_print!(Message::CurrentFilters(
        session.view_mode().to_string(),
        session.category_filter().to_string()
    ));

    let visible = session.visible_tasks();
    if visible.is_empty() {
        msg_info!(Message::NoTasksMatchFilters);
    } else {
        msg_print!(Message::TasksHeader(visible.len()), true);
        View::tasks(&visible, today);
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&session.compute_stats());
}

/// Parses the due-date prompt input; past dates are refused.
fn validate_due_input(input: &str, today: NaiveDate) -> Result<Option<NaiveDate>, Message> {
    let due = parse_due_date(input, today).map_err(|_| Message::InvalidDate(input.trim().to_string()))?;
    match due {
        Some(date) if date < today => Err(Message::DueDateInPast(format_date(&date))),
        other => Ok(other),
    }
}

fn handle_add(session: &mut Session, config: &Config, today: NaiveDate) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    if title.trim().is_empty() {
        msg_error!(Message::TitleRequired);
        return Ok(());
    }

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let category = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&Category::ALL)
        .default(Category::ALL.iter().position(|c| *c == config.defaults.category).unwrap_or(0))
        .interact()?;

    let priority = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&Priority::ALL)
        .default(Priority::ALL.iter().position(|p| *p == config.defaults.priority).unwrap_or(0))
        .interact()?;

    let due_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| validate_due_input(input, today).map(|_| ()).map_err(|m| m.to_string()))
        .interact_text()?;
    let due_date = match validate_due_input(&due_input, today) {
        Ok(due_date) => due_date,
        Err(message) => {
            msg_error!(message);
            return Ok(());
        }
    };

    match session.add_task(&title, &description, Category::ALL[category], Priority::ALL[priority], due_date) {
        Ok(task) => msg_success!(Message::TaskCreated(task.id, task.title)),
        Err(e) => msg_error!(e),
    }
    Ok(())
}

/// Lets the user pick one of `tasks`; `None` when there is nothing to pick.
fn select_task(tasks: &[&Task]) -> Result<Option<u32>> {
    if tasks.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|task| format!("#{} {}", task.id, task.title)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(tasks[selection].id))
}

fn handle_complete(session: &mut Session) -> Result<()> {
    let pending = session.visible_tasks().into_iter().filter(|task| !task.completed).collect::<Vec<_>>();
    let Some(id) = select_task(&pending)? else {
        msg_info!(Message::NoTasksMatchFilters);
        return Ok(());
    };

    report_toggle(session, id, Session::complete_task, Message::TaskCompleted);
    Ok(())
}

fn handle_undo(session: &mut Session) -> Result<()> {
    let completed = session.visible_tasks().into_iter().filter(|task| task.completed).collect::<Vec<_>>();
    let Some(id) = select_task(&completed)? else {
        msg_info!(Message::NoTasksMatchFilters);
        return Ok(());
    };

    report_toggle(session, id, Session::uncomplete_task, Message::TaskReopened);
    Ok(())
}

fn report_toggle(session: &mut Session, id: u32, toggle: fn(&mut Session, u32) -> bool, done: fn(String) -> Message) {
    let title = session.store().find(id).map(|task| task.title.clone());
    match title {
        None => msg_warning!(Message::TaskNotFoundWithId(id)),
        Some(title) if toggle(session, id) => msg_success!(done(title)),
        Some(_) => msg_info!(Message::TaskUnchanged(id)),
    }
}

fn handle_delete(session: &mut Session) -> Result<()> {
    let visible = session.visible_tasks();
    let Some(id) = select_task(&visible)? else {
        msg_info!(Message::NoTasksMatchFilters);
        return Ok(());
    };
    let Some(title) = session.store().find(id).map(|task| task.title.clone()) else {
        msg_warning!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed && session.delete_task(id) {
        msg_success!(Message::TaskDeleted(title));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn handle_view_mode(session: &mut Session) -> Result<()> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptViewMode.to_string())
        .items(&ViewMode::ALL)
        .default(ViewMode::ALL.iter().position(|mode| *mode == session.view_mode()).unwrap_or(0))
        .interact()?;

    session.set_view_mode(ViewMode::ALL[selection]);
    msg_info!(Message::ViewModeChanged(session.view_mode().to_string()));
    Ok(())
}

fn handle_category_filter(session: &mut Session) -> Result<()> {
    let choices = session.category_choices();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategoryFilter.to_string())
        .items(&choices)
        .default(choices.iter().position(|choice| *choice == session.category_filter()).unwrap_or(0))
        .interact()?;

    session.set_category_filter(choices[selection]);
    msg_info!(Message::CategoryFilterChanged(session.category_filter().to_string()));
    Ok(())
}

fn handle_clear_completed(session: &mut Session) -> Result<()> {
    let completed = session.compute_stats().completed;
    if completed == 0 {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClearCompleted(completed).to_string())
        .default(true)
        .interact()?;

    if confirmed {
        let cleared = session.clear_completed_tasks();
        msg_success!(Message::CompletedTasksCleared(cleared));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn handle_export(session: &Session, config: &Config, format: ExportFormat) {
    msg_info!(Message::ExportingData(format.extension().to_uppercase()));

    let exporter = Exporter::new(format, None, config.export.directory.as_deref());
    if let Err(e) = exporter.export(session.store().tasks()) {
        msg_error!(Message::ExportFailed(e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_due_input_accepts_blank_today_and_future() {
        assert_eq!(validate_due_input("", today()).unwrap(), None);
        assert_eq!(validate_due_input("today", today()).unwrap(), Some(today()));
        assert_eq!(
            validate_due_input("2025-07-01", today()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1)
        );
    }

    #[test]
    fn test_due_input_rejects_past_and_garbage() {
        assert!(matches!(validate_due_input("2025-06-09", today()), Err(Message::DueDateInPast(_))));
        assert!(matches!(validate_due_input("next week", today()), Err(Message::InvalidDate(_))));
    }

    #[test]
    fn test_actions_follow_store_contents() {
        let mut session = Session::new();
        assert_eq!(available_actions(&session, ExportFormat::Json), vec![Action::Add, Action::Quit]);

        let id = session.add_task("Read", "", Category::Learning, Priority::Low, None).unwrap().id;
        let actions = available_actions(&session, ExportFormat::Json);
        assert!(actions.contains(&Action::Complete));
        assert!(!actions.contains(&Action::ClearCompleted));
        assert!(actions.contains(&Action::Export(ExportFormat::Csv)));

        session.complete_task(id);
        let actions = available_actions(&session, ExportFormat::Json);
        assert!(!actions.contains(&Action::Complete));
        assert!(actions.contains(&Action::Undo));
        assert!(actions.contains(&Action::ClearCompleted));
    }

    #[test]
    fn test_export_actions_list_configured_format_first() {
        let mut session = Session::new();
        session.add_task("Read", "", Category::Learning, Priority::Low, None).unwrap();

        let exports = |format| -> Vec<Action> {
            available_actions(&session, format)
                .into_iter()
                .filter(|action| matches!(action, Action::Export(_)))
                .collect()
        };

        assert_eq!(exports(ExportFormat::Csv), vec![Action::Export(ExportFormat::Csv), Action::Export(ExportFormat::Json)]);
        assert_eq!(exports(ExportFormat::Json), vec![Action::Export(ExportFormat::Json), Action::Export(ExportFormat::Csv)]);
    }
}
