//! Core library modules for the todo application.
//!
//! ## Features
//!
//! - **Task Model**: tasks, categories, priorities, view modes
//! - **Task Store**: session-scoped, in-memory collection with id counter
//! - **Queries**: status/category filters, display ordering, statistics
//! - **Export**: JSON and CSV encoders and file writer
//! - **Infrastructure**: configuration, data storage paths, messaging, tables
//!
//! ## Usage
//!
//! ```rust
//! use tasklist::libs::session::Session;
//! use tasklist::libs::task::{Category, CategoryFilter, Priority, ViewMode};
//!
//! let mut session = Session::new();
//! let task = session
//!     .add_task("File taxes", "", Category::Work, Priority::Urgent, None)
//!     .unwrap();
//! session.complete_task(task.id);
//! assert_eq!(session.list_tasks(ViewMode::CompletedOnly, CategoryFilter::All).len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod query;
pub mod session;
pub mod stats;
pub mod store;
pub mod task;
pub mod view;
