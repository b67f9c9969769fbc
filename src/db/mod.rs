//! Database layer for taskman.
//!
//! A single SQLite table holds every task. The connection is opened once per
//! session and owned by the [`tasks::Tasks`] store that wraps it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::db::{db::Db, tasks::Tasks};
//!
//! let mut tasks = Tasks::new(Db::open("tasks.db")?)?;
//! let id = tasks.insert("Buy milk", Some("2024-01-01"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
pub mod db;

/// Task CRUD operations over the `tasks` table.
pub mod tasks;
