//! Task model and the outcome values returned by the task store.
//!
//! Not-found, no-op and already-in-state conditions are ordinary results
//! here, never errors. Only malformed input and storage faults are errors.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single to-do record as stored in the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub due_date: Option<String>,
    pub completed: bool,
}

impl Task {
    pub fn completion(&self) -> Completion {
        Completion::from(self.completed)
    }
}

/// Desired completion state for [`crate::db::tasks::Tasks::set_completion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    Complete,
    Incomplete,
}

impl Completion {
    pub fn is_complete(self) -> bool {
        matches!(self, Completion::Complete)
    }
}

impl From<bool> for Completion {
    fn from(completed: bool) -> Self {
        if completed {
            Completion::Complete
        } else {
            Completion::Incomplete
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Complete => write!(f, "complete"),
            Completion::Incomplete => write!(f, "incomplete"),
        }
    }
}

/// Field changes for an existing task.
///
/// `None` and blank strings both mean "leave unchanged". A due date can be
/// replaced but never cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl TaskUpdate {
    pub fn new(description: Option<String>, due_date: Option<String>) -> Self {
        Self {
            description: non_blank(description),
            due_date: non_blank(due_date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.due_date.is_none()
    }
}

/// Turns empty or whitespace-only input into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NoChanges,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Changed,
    AlreadyInState,
    NotFound,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task description must not be empty")]
    EmptyDescription,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a valid task ID")]
    InvalidTaskId(String),
}

/// Parses a task id typed at a prompt.
pub fn parse_task_id(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidTaskId(input.trim().to_string()))
}
