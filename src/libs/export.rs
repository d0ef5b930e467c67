//! Task export to JSON and CSV.
//!
//! Provides the two interchange encodings of a task collection plus the
//! file writer used by the download/export actions.
//!
//! ## Features
//!
//! - **Export Formats**: pretty-printed JSON array, CSV with a header row
//! - **Stable Layout**: both formats use the field order of [`EXPORT_COLUMNS`]
//! - **Pure Encoders**: [`to_json`] and [`to_csv`] only read the tasks
//! - **File Naming**: `todo_list_YYYYMMDD_HHMM.<ext>` unless a path is given
//!
//! ## Field Encoding
//!
//! | Field | JSON | CSV |
//! |---|---|---|
//! | `due_date` | `"YYYY-MM-DD"` or `null` | `YYYY-MM-DD` or empty |
//! | `created_at` / `completed_at` | `"YYYY-MM-DD HH:MM"` or `null` | same text or empty |
//! | `completed` | `true` / `false` | `true` / `false` |
//!
//! CSV fields containing the delimiter, quotes or newlines are quoted with
//! standard RFC 4180 rules by the `csv` crate.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::export::{Exporter, ExportFormat};
//! use tasklist::libs::store::TaskStore;
//!
//! let store = TaskStore::new();
//! let exporter = Exporter::new(ExportFormat::Csv, None, None);
//! exporter.export(store.tasks())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    libs::{
        formatter::{format_date, format_timestamp},
        messages::Message,
        task::Task,
    },
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Column order shared by the CSV header and the JSON object fields.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "id",
    "title",
    "description",
    "category",
    "priority",
    "due_date",
    "completed",
    "created_at",
    "completed_at",
];

/// Prefix of generated export file names.
pub const EXPORT_FILE_PREFIX: &str = "todo_list";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON array of task objects.
    #[default]
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Serializable view of a task with dates already rendered as text.
///
/// Field declaration order is the export column order and must match
/// [`EXPORT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub completed_at: Option<String>,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.to_string(),
            priority: task.priority.to_string(),
            due_date: task.due_date.as_ref().map(format_date),
            completed: task.completed,
            created_at: format_timestamp(&task.created_at),
            completed_at: task.completed_at.as_ref().map(format_timestamp),
        }
    }
}

fn export_records(tasks: &[Task]) -> Vec<ExportTask> {
    tasks.iter().map(ExportTask::from).collect()
}

/// Encodes tasks as a pretty-printed JSON array.
pub fn to_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export_records(tasks))?)
}

/// Encodes tasks as CSV: one header row, then one row per task.
///
/// The header is written even when there are no tasks.
pub fn to_csv(tasks: &[Task]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    wtr.write_record(EXPORT_COLUMNS)?;

    for record in export_records(tasks) {
        wtr.serialize(record)?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes task exports to disk.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for `format`.
    ///
    /// Without an explicit `output_path` the file is named
    /// `todo_list_YYYYMMDD_HHMM.<ext>` and placed in `directory`, or in the
    /// working directory when no directory is configured.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, directory: Option<&Path>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let file_name = default_file_name(format);
            match directory {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            }
        });

        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Encodes tasks in this exporter's format without touching the disk.
    pub fn render(&self, tasks: &[Task]) -> Result<String> {
        match self.format {
            ExportFormat::Json => to_json(tasks),
            ExportFormat::Csv => to_csv(tasks),
        }
    }

    /// Encodes tasks and writes them to the output path.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let content = self.render(tasks)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        File::create(&self.output_path)?.write_all(content.as_bytes())?;

        info!(path = %self.output_path.display(), format = ?self.format, rows = tasks.len(), "tasks exported");
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(self.output_path.clone())
    }
}

/// `todo_list_YYYYMMDD_HHMM.<ext>` stamped with the current local time.
pub fn default_file_name(format: ExportFormat) -> String {
    format!("{}_{}.{}", EXPORT_FILE_PREFIX, Local::now().format("%Y%m%d_%H%M"), format.extension())
}
