//! # Tasklist - a session-scoped todo list
//!
//! A command-line todo list for creating, filtering, sorting, completing,
//! deleting and exporting tasks. Tasks live in memory for the duration of
//! one session and are gone when it ends; export them to JSON or CSV to keep
//! a copy.
//!
//! ## Features
//!
//! - **Task Management**: title, description, category, priority, due date
//! - **Views**: pending/completed/all, per-category filter, priority ordering
//! - **Statistics**: totals and completion rate
//! - **Data Export**: JSON and CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
