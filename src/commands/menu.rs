use super::{task, Session};
use crate::{
    libs::{
        messages::Message,
        task::{parse_task_id, Completion, TaskUpdate},
    },
    msg_error, msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const ADD: usize = 0;
const VIEW: usize = 1;
const EDIT: usize = 2;
const REMOVE: usize = 3;
const MARK: usize = 4;
const EXIT: usize = 5;

/// Runs the numbered menu until the user picks Exit.
pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::Welcome, true);

    let options = [
        Message::MenuAdd.to_string(),
        Message::MenuView.to_string(),
        Message::MenuEdit.to_string(),
        Message::MenuRemove.to_string(),
        Message::MenuMark.to_string(),
        Message::MenuExit.to_string(),
    ];

    loop {
        msg_print!(Message::MenuTitle, true);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&options)
            .default(VIEW)
            .interact()?;

        match selection {
            ADD => handle_add(session)?,
            VIEW => task::list(&mut session.tasks, task::ListFormat::Table)?,
            EDIT => handle_edit(session)?,
            REMOVE => handle_remove(session)?,
            MARK => handle_mark(session)?,
            EXIT => break,
            _ => {}
        }
    }

    msg_print!(Message::Goodbye, true);
    Ok(())
}

fn handle_add(session: &mut Session) -> Result<()> {
    let description = prompt_text(Message::PromptTaskDescription)?;
    let due_date = prompt_text(Message::PromptDueDate)?;

    task::add(&mut session.tasks, &description, Some(due_date.as_str()))
}

fn handle_edit(session: &mut Session) -> Result<()> {
    let Some(id) = prompt_task_id(Message::PromptEditTaskId)? else {
        return Ok(());
    };
    let description = prompt_text(Message::PromptNewDescription)?;
    let due_date = prompt_text(Message::PromptNewDueDate)?;

    task::edit(&mut session.tasks, id, &TaskUpdate::new(Some(description), Some(due_date)))
}

fn handle_remove(session: &mut Session) -> Result<()> {
    let Some(id) = prompt_task_id(Message::PromptRemoveTaskId)? else {
        return Ok(());
    };

    task::remove(session, id, false)
}

/// Checks the id before asking which state to set.
fn handle_mark(session: &mut Session) -> Result<()> {
    let Some(id) = prompt_task_id(Message::PromptMarkTaskId)? else {
        return Ok(());
    };
    let Some(current) = session.tasks.get_by_id(id)? else {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    };

    let states = [Completion::Complete, Completion::Incomplete];
    let labels = [Message::MarkAsComplete.to_string(), Message::MarkAsIncomplete.to_string()];
    let default = if current.completed { 1 } else { 0 };
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMarkAs.to_string())
        .items(&labels)
        .default(default)
        .interact()?;

    task::mark(&mut session.tasks, id, states[selection])
}

fn prompt_text(prompt: Message) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Reads a task id. A non-numeric entry is reported and yields `None`.
fn prompt_task_id(prompt: Message) -> Result<Option<i64>> {
    let input = prompt_text(prompt)?;
    match parse_task_id(&input) {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            msg_error!(Message::InvalidNumber);
            Ok(None)
        }
    }
}
