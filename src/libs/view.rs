use super::formatter::{format_status, format_task_line};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "DESCRIPTION", "DUE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                format_status(task.completed),
                task.description,
                task.due_date.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks_plain(tasks: &[Task]) -> Result<()> {
        for task in tasks {
            println!("{}", format_task_line(task));
        }
        Ok(())
    }

    pub fn tasks_json(tasks: &[Task]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        Ok(())
    }
}
