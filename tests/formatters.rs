#[cfg(test)]
mod tests {
    use taskman::libs::formatter::{format_due_date, format_status, format_task_line};
    use taskman::libs::task::Task;

    fn task(id: i64, description: &str, due_date: Option<&str>, completed: bool) -> Task {
        Task {
            id,
            description: description.to_string(),
            due_date: due_date.map(str::to_string),
            completed,
        }
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(true), "[x]");
        assert_eq!(format_status(false), "[ ]");
    }

    #[test]
    fn test_format_due_date() {
        assert_eq!(format_due_date(Some("2024-01-01")), " (Due: 2024-01-01)");
        assert_eq!(format_due_date(Some("")), "");
        assert_eq!(format_due_date(None), "");
    }

    #[test]
    fn test_format_task_line_with_due_date() {
        let line = format_task_line(&task(1, "Buy milk", Some("2024-01-01"), true));
        assert_eq!(line, "1. [x] Buy milk (Due: 2024-01-01)");
    }

    #[test]
    fn test_format_task_line_without_due_date() {
        let line = format_task_line(&task(2, "Call Alice", None, false));
        assert_eq!(line, "2. [ ] Call Alice");
    }

    #[test]
    fn test_task_json_shape() {
        let json = serde_json::to_value(task(3, "Write tests", None, false)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["description"], "Write tests");
        assert!(json["due_date"].is_null());
        assert_eq!(json["completed"], false);
    }
}
