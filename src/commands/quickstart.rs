//! Quick-start command.
//!
//! Builds a fresh session holding the three example tasks, shows them the
//! same way the interactive session would, and optionally exports them.
//! Useful as a non-interactive tour and for producing sample export files.
//!
//! With `--stdout` the export payload is the only thing written to stdout,
//! so `todo quickstart --export csv --stdout > tasks.csv` yields a valid file.

use crate::{
    commands::session::print_board,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        session::Session,
        task::{CategoryFilter, ViewMode},
    },
    msg_bail_anyhow, msg_debug, msg_info, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct QuickstartArgs {
    /// View mode used for the printed table
    #[arg(short, long, value_enum, default_value = "all-tasks")]
    view: ViewMode,

    /// Category filter used for the printed table ("All" or a category name)
    #[arg(short, long, default_value = "All")]
    category: CategoryFilter,

    /// Mark the example task with this id as completed before printing
    #[arg(long)]
    complete: Option<u32>,

    /// Export the example tasks; without a value the configured format is used
    #[arg(short, long, value_enum, num_args = 0..=1)]
    export: Option<Option<ExportFormat>>,

    /// Custom output file path for the export
    #[arg(short, long, requires = "export")]
    output: Option<PathBuf>,

    /// Print the export to stdout instead of writing a file
    #[arg(long, requires = "export", conflicts_with = "output")]
    stdout: bool,
}

impl QuickstartArgs {
    /// Requested export format, falling back to the configured one for a bare `--export`.
    pub fn export_format(&self, config: &Config) -> Option<ExportFormat> {
        self.export.map(|format| format.unwrap_or(config.export.format))
    }

    /// Session with the example tasks, the requested task completed and the display filters applied.
    ///
    /// Fails when `--complete` names an id that is not one of the examples.
    pub fn example_session(&self, today: NaiveDate) -> Result<Session> {
        let mut session = Session::new();
        session.seed_examples(today);

        if let Some(id) = self.complete {
            if !session.complete_task(id) {
                msg_bail_anyhow!(Message::TaskNotFoundWithId(id));
            }
        }

        session.set_view_mode(self.view);
        session.set_category_filter(self.category);
        Ok(session)
    }

    /// Export payload for `--stdout`, or `None` when the export goes to a file or is not requested.
    pub fn stdout_payload(&self, session: &Session, config: &Config) -> Result<Option<String>> {
        if !self.stdout {
            return Ok(None);
        }
        let Some(format) = self.export_format(config) else {
            return Ok(None);
        };

        msg_debug!(Message::ExportingData(format.extension().to_uppercase()));
        let exporter = Exporter::new(format, None, None);
        Ok(Some(exporter.render(session.store().tasks())?))
    }
}

pub fn cmd(args: QuickstartArgs) -> Result<()> {
    let config = Config::read()?;
    let today = Local::now().date_naive();
    let session = args.example_session(today)?;

    if let Some(payload) = args.stdout_payload(&session, &config)? {
        println!("{}", payload);
        return Ok(());
    }

    msg_success!(Message::QuickstartSeeded(session.store().len()));
    print_board(&session, today);

    if let Some(format) = args.export_format(&config) {
        let exporter = Exporter::new(format, args.output, config.export.directory.as_deref());
        msg_info!(Message::ExportingData(exporter.format().extension().to_uppercase()));
        exporter.export(session.store().tasks())?;
    }

    Ok(())
}
