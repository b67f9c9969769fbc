//! # Taskman
//!
//! A single-user command-line task tracker backed by a SQLite table.
//!
//! ## Features
//!
//! - **Task Store**: Durable create, list, update, delete and completion toggling
//! - **Interactive Menu**: Numbered menu loop for everyday use
//! - **Subcommands**: One-shot commands for scripting
//! - **Configuration**: Optional JSON config for the database location
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
