//! Configuration management for the todo application.
//!
//! Tasks themselves are never written to disk; the configuration file only
//! holds preferences that shape a new session.
//!
//! ## Configuration Structure
//!
//! - **Defaults**: category and priority preselected when adding a task
//! - **Export**: target directory and preferred export format
//! - **Session**: whether a new session starts with the example tasks
//!
//! ## Storage
//!
//! The configuration is a pretty-printed JSON file named [`CONFIG_FILE_NAME`]
//! in the directory resolved by [`DataStorage`]. A missing file is not an
//! error; [`Config::read`] falls back to [`Config::default`].
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tasklist::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Default priority: {}", config.defaults.priority);
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::export::ExportFormat;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Priority};
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Values preselected in the add-task prompts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TaskDefaults {
    #[serde(with = "category_name")]
    pub category: Category,
    #[serde(with = "priority_name")]
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for generated export files; the working directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    pub format: ExportFormat,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Populate every new session with the quick-start example tasks.
    pub seed_examples: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: TaskDefaults,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Loads the configuration file, or the defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            debug!(path = %config_file_path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        serde_json::from_str(&config_str)
            .map_err(|e| msg_error_anyhow!(Message::ConfigParseFailed(config_file_path.display().to_string(), e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&config_file_path)?;
        debug!(path = %config_file_path.display(), "configuration removed");
        Ok(true)
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "defaults".to_string(),
                name: Message::ConfigModuleDefaults.to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: Message::ConfigModuleExport.to_string(),
            },
            ConfigModule {
                key: "session".to_string(),
                name: Message::ConfigModuleSession.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "defaults" => {
                    msg_print!(Message::ConfigModuleDefaults);
                    let category = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTaskCategory.to_string())
                        .items(&Category::ALL)
                        .default(position(&Category::ALL, &config.defaults.category))
                        .interact()?;
                    let priority = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTaskPriority.to_string())
                        .items(&Priority::ALL)
                        .default(position(&Priority::ALL, &config.defaults.priority))
                        .interact()?;
                    config.defaults = TaskDefaults {
                        category: Category::ALL[category],
                        priority: Priority::ALL[priority],
                    };
                }
                "export" => {
                    msg_print!(Message::ConfigModuleExport);
                    let directory: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportDirectory.to_string())
                        .default(
                            config
                                .export
                                .directory
                                .as_ref()
                                .map(|dir| dir.display().to_string())
                                .unwrap_or_default(),
                        )
                        .allow_empty(true)
                        .interact_text()?;
                    let formats = [ExportFormat::Json, ExportFormat::Csv];
                    let format = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportFormat.to_string())
                        .items(&formats.iter().map(|f| f.extension()).collect::<Vec<_>>())
                        .default(position(&formats, &config.export.format))
                        .interact()?;
                    config.export = ExportConfig {
                        directory: if directory.trim().is_empty() { None } else { Some(PathBuf::from(directory.trim())) },
                        format: formats[format],
                    };
                }
                "session" => {
                    msg_print!(Message::ConfigModuleSession);
                    config.session.seed_examples = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSeedExamples.to_string())
                        .default(config.session.seed_examples)
                        .interact()?;
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn position<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().position(|item| item == value).unwrap_or(0)
}

/// Stores categories by display name so the file stays hand-editable.
mod category_name {
    use crate::libs::task::Category;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(category: &Category, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(category.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Category, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

mod priority_name {
    use crate::libs::task::Priority;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(priority: &Priority, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(priority.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Priority, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}
