#[cfg(test)]
mod tests {
    use taskman::libs::messages::Message;
    use taskman::libs::task::{non_blank, parse_task_id, Completion, InputError, TaskUpdate};

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("12"), Ok(12));
        assert_eq!(parse_task_id("  7 \n"), Ok(7));
        assert_eq!(parse_task_id("abc"), Err(InputError::InvalidTaskId("abc".to_string())));
        assert!(parse_task_id("").is_err());
        assert!(parse_task_id("1.5").is_err());
    }

    #[test]
    fn test_task_update_treats_blank_as_unchanged() {
        assert!(TaskUpdate::new(None, None).is_empty());
        assert!(TaskUpdate::new(Some("".to_string()), Some("   ".to_string())).is_empty());

        let update = TaskUpdate::new(Some("New".to_string()), Some("".to_string()));
        assert!(!update.is_empty());
        assert_eq!(update.description.as_deref(), Some("New"));
        assert_eq!(update.due_date, None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some(" x ".to_string())), Some(" x ".to_string()));
        assert_eq!(non_blank(Some("\t".to_string())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_completion_conversions() {
        assert_eq!(Completion::from(true), Completion::Complete);
        assert_eq!(Completion::from(false), Completion::Incomplete);
        assert!(Completion::Complete.is_complete());
        assert!(!Completion::Incomplete.is_complete());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Message::TaskMarked(1, Completion::Complete).to_string(), "Task 1 marked as complete.");
        assert_eq!(
            Message::TaskAlreadyInState(4, Completion::Incomplete).to_string(),
            "Task 4 is already incomplete."
        );
        assert_eq!(Message::TaskAdded("Buy milk".to_string()).to_string(), "Task \"Buy milk\" added.");
        assert_eq!(Message::NoChangesMade.to_string(), "No changes made.");
        assert_eq!(Message::InvalidNumber.to_string(), "Please enter a valid number.");
        assert_eq!(Message::DebugTaskCompletion(5, Completion::Complete).to_string(), "Set task 5 complete");
    }
}
