//! Display implementation for taskman messages.
//!
//! All message text is defined here so wording stays consistent between the
//! interactive menu and the one-shot subcommands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Welcome => "Welcome to the Task Manager!".to_string(),
            Message::Goodbye => "Exiting Task Manager.\nThank you for using the Task Manager!".to_string(),
            Message::MenuTitle => "Task Manager".to_string(),
            Message::MenuAdd => "1. Add Task".to_string(),
            Message::MenuView => "2. View Tasks".to_string(),
            Message::MenuEdit => "3. Edit Task".to_string(),
            Message::MenuRemove => "4. Remove Task".to_string(),
            Message::MenuMark => "5. Mark Task Complete/Incomplete".to_string(),
            Message::MenuExit => "6. Exit".to_string(),
            Message::PromptMenuChoice => "Choose an option".to_string(),
            Message::InvalidNumber => "Please enter a valid number.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Task \"{}\" added.", description),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksAvailable => "No tasks available.".to_string(),
            Message::TaskUpdated(id) => format!("Task {} updated.", id),
            Message::NoChangesMade => "No changes made.".to_string(),
            Message::TaskRemoved(id) => format!("Task {} removed.", id),
            Message::TaskRemovalCancelled => "Task removal cancelled.".to_string(),
            Message::TaskNotFound(id) => format!("Invalid task ID: no task with ID {}.", id),
            Message::TaskMarked(id, state) => format!("Task {} marked as {}.", id, state),
            Message::TaskAlreadyInState(id, state) => format!("Task {} is already {}.", id, state),
            Message::EmptyDescription => "Task description must not be empty.".to_string(),
            Message::ConfirmRemoveTask(id) => format!("Are you sure you want to remove task {}?", id),
            Message::MarkAsComplete => "Complete".to_string(),
            Message::MarkAsIncomplete => "Incomplete".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskDescription => "Enter the task".to_string(),
            Message::PromptDueDate => "Enter the due date (optional)".to_string(),
            Message::PromptEditTaskId => "Enter the task ID to edit".to_string(),
            Message::PromptNewDescription => "Enter the new description (leave blank to keep current)".to_string(),
            Message::PromptNewDueDate => "Enter the new due date (leave blank to keep current)".to_string(),
            Message::PromptRemoveTaskId => "Enter the task ID to remove".to_string(),
            Message::PromptMarkTaskId => "Enter task ID to mark complete/incomplete".to_string(),
            Message::PromptMarkAs => "Mark as".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigIgnored(reason) => format!("Ignoring configuration, using defaults: {}", reason),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptConfirmDeletes => "Ask for confirmation before removing a task?".to_string(),

            // === DEBUG MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database {}", path),
            Message::DebugTaskInserted(id) => format!("Inserted task {}", id),
            Message::DebugTaskUpdated(id) => format!("Updated task {}", id),
            Message::DebugTaskDeleted(id) => format!("Deleted task {}", id),
            Message::DebugTaskCompletion(id, state) => format!("Set task {} {}", id, state),
        };
        write!(f, "{}", text)
    }
}
