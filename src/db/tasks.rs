use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Completion, CompletionOutcome, DeleteOutcome, Task, TaskError, TaskUpdate, UpdateOutcome};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// `AUTOINCREMENT` keeps ids from being reused after a delete.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    due_date TEXT,
    completed INTEGER DEFAULT 0
);";
const INSERT_TASK: &str = "INSERT INTO tasks (description, due_date) VALUES (?1, ?2)";
const SELECT_TASKS: &str = "SELECT id, description, due_date, completed FROM tasks ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, description, due_date, completed FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET description = COALESCE(?2, description), due_date = COALESCE(?3, due_date) WHERE id = ?1";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Durable store of tasks. Every call writes through immediately.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Takes ownership of an open database and creates the table if absent.
    pub fn new(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new incomplete task and returns its id.
    pub fn insert(&mut self, description: &str, due_date: Option<&str>) -> Result<i64> {
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription.into());
        }
        let due_date = due_date.filter(|d| !d.trim().is_empty());
        self.conn.execute(INSERT_TASK, params![description, due_date])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!(Message::DebugTaskInserted(id));

        Ok(id)
    }

    /// All tasks in ascending id order.
    pub fn list(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], task_from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<UpdateOutcome> {
        let update = TaskUpdate::new(update.description.clone(), update.due_date.clone());
        if update.is_empty() {
            return Ok(UpdateOutcome::NoChanges);
        }

        let affected = self.conn.execute(UPDATE_TASK, params![id, update.description, update.due_date])?;
        if affected == 0 {
            return Ok(UpdateOutcome::NotFound);
        }
        msg_debug!(Message::DebugTaskUpdated(id));
        Ok(UpdateOutcome::Updated)
    }

    /// Removes a task unconditionally. Confirmation belongs to the caller.
    pub fn delete(&mut self, id: i64) -> Result<DeleteOutcome> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Ok(DeleteOutcome::NotFound);
        }
        msg_debug!(Message::DebugTaskDeleted(id));
        Ok(DeleteOutcome::Removed)
    }

    pub fn set_completion(&mut self, id: i64, desired: Completion) -> Result<CompletionOutcome> {
        let task = match self.get_by_id(id)? {
            Some(task) => task,
            None => return Ok(CompletionOutcome::NotFound),
        };
        if task.completion() == desired {
            return Ok(CompletionOutcome::AlreadyInState);
        }

        self.conn.execute(UPDATE_COMPLETED, params![id, desired.is_complete()])?;
        msg_debug!(Message::DebugTaskCompletion(id, desired));
        Ok(CompletionOutcome::Changed)
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        due_date: row.get(2)?,
        completed: row.get(3)?,
    })
}
