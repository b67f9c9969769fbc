//! Core library modules for taskman.
//!
//! - **Task model**: task record, update requests and operation outcomes
//! - **Infrastructure**: configuration, data directory, logging, messages
//! - **Presentation**: table, plain and JSON rendering of task lists

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
