use super::task::Task;

pub fn format_status(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn format_due_date(due_date: Option<&str>) -> String {
    match due_date {
        Some(date) if !date.is_empty() => format!(" (Due: {})", date),
        _ => String::new(),
    }
}

/// One-line rendering: `3. [x] Buy milk (Due: 2024-01-01)`.
pub fn format_task_line(task: &Task) -> String {
    format!(
        "{}. {} {}{}",
        task.id,
        format_status(task.completed),
        task.description,
        format_due_date(task.due_date.as_deref())
    )
}
