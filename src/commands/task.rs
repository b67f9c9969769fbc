//! Task commands shared by the subcommands and the interactive menu.
//!
//! Every handler turns a store outcome into a message. Only storage faults
//! are returned as errors.

use super::Session;
use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Completion, CompletionOutcome, DeleteOutcome, TaskError, TaskUpdate, UpdateOutcome},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    pub description: String,
    /// Free-form due date, e.g. 2024-01-01
    #[arg(short, long)]
    pub due: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// One line per task instead of a table
    #[arg(long, conflicts_with = "json")]
    pub plain: bool,
    /// JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: i64,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// New due date (same `-d` as `add`)
    #[arg(short, long)]
    pub due: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct MarkArgs {
    pub id: i64,
    #[arg(value_enum)]
    pub state: Completion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Plain,
    Json,
}

pub fn add_cmd(session: &mut Session, args: AddArgs) -> Result<()> {
    add(&mut session.tasks, &args.description, args.due.as_deref())
}

pub fn list_cmd(session: &mut Session, args: ListArgs) -> Result<()> {
    let format = match (args.plain, args.json) {
        (_, true) => ListFormat::Json,
        (true, _) => ListFormat::Plain,
        _ => ListFormat::Table,
    };
    list(&mut session.tasks, format)
}

pub fn edit_cmd(session: &mut Session, args: EditArgs) -> Result<()> {
    edit(&mut session.tasks, args.id, &TaskUpdate::new(args.description, args.due))
}

pub fn remove_cmd(session: &mut Session, args: RemoveArgs) -> Result<()> {
    remove(session, args.id, args.yes)
}

pub fn mark_cmd(session: &mut Session, args: MarkArgs) -> Result<()> {
    mark(&mut session.tasks, args.id, args.state)
}

pub fn add(tasks: &mut Tasks, description: &str, due_date: Option<&str>) -> Result<()> {
    match tasks.insert(description, due_date) {
        Ok(_) => {
            msg_success!(Message::TaskAdded(description.to_string()));
            Ok(())
        }
        Err(e) if matches!(e.downcast_ref::<TaskError>(), Some(TaskError::EmptyDescription)) => {
            msg_error!(Message::EmptyDescription);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

pub fn list(tasks: &mut Tasks, format: ListFormat) -> Result<()> {
    let tasks = tasks.list()?;

    if format == ListFormat::Json {
        return View::tasks_json(&tasks);
    }
    if tasks.is_empty() {
        msg_info!(Message::NoTasksAvailable);
        return Ok(());
    }

    msg_print!(Message::TasksHeader);
    match format {
        ListFormat::Plain => View::tasks_plain(&tasks),
        _ => View::tasks(&tasks),
    }
}

pub fn edit(tasks: &mut Tasks, id: i64, update: &TaskUpdate) -> Result<()> {
    match tasks.update(id, update)? {
        UpdateOutcome::Updated => msg_success!(Message::TaskUpdated(id)),
        UpdateOutcome::NoChanges => msg_info!(Message::NoChangesMade),
        UpdateOutcome::NotFound => msg_error!(Message::TaskNotFound(id)),
    }
    Ok(())
}

/// Asks for confirmation (unless disabled) and then deletes.
pub fn remove(session: &mut Session, id: i64, skip_confirm: bool) -> Result<()> {
    if session.config.confirm_delete && !skip_confirm {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTask(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::TaskRemovalCancelled);
            return Ok(());
        }
    }

    match session.tasks.delete(id)? {
        DeleteOutcome::Removed => msg_success!(Message::TaskRemoved(id)),
        DeleteOutcome::NotFound => msg_error!(Message::TaskNotFound(id)),
    }
    Ok(())
}

pub fn mark(tasks: &mut Tasks, id: i64, state: Completion) -> Result<()> {
    match tasks.set_completion(id, state)? {
        CompletionOutcome::Changed => msg_success!(Message::TaskMarked(id, state)),
        CompletionOutcome::AlreadyInState => msg_info!(Message::TaskAlreadyInState(id, state)),
        CompletionOutcome::NotFound => msg_error!(Message::TaskNotFound(id)),
    }
    Ok(())
}
