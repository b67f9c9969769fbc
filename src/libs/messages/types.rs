use crate::libs::task::Completion;

/// Every piece of user-facing text in taskman. Rendered by the `Display`
/// impl in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Welcome,
    Goodbye,
    MenuTitle,
    MenuAdd,
    MenuView,
    MenuEdit,
    MenuRemove,
    MenuMark,
    MenuExit,
    PromptMenuChoice,
    InvalidNumber,

    // === TASK MESSAGES ===
    TaskAdded(String),
    TasksHeader,
    NoTasksAvailable,
    TaskUpdated(i64),
    NoChangesMade,
    TaskRemoved(i64),
    TaskRemovalCancelled,
    TaskNotFound(i64),
    TaskMarked(i64, Completion),
    TaskAlreadyInState(i64, Completion),
    EmptyDescription,
    ConfirmRemoveTask(i64),
    MarkAsComplete,
    MarkAsIncomplete,

    // === TASK PROMPTS ===
    PromptTaskDescription,
    PromptDueDate,
    PromptEditTaskId,
    PromptNewDescription,
    PromptNewDueDate,
    PromptRemoveTaskId,
    PromptMarkTaskId,
    PromptMarkAs,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String),
    ConfigIgnored(String),
    PromptDatabasePath,
    PromptConfirmDeletes,

    // === DEBUG MESSAGES ===
    DatabaseOpened(String),
    DebugTaskInserted(i64),
    DebugTaskUpdated(i64),
    DebugTaskDeleted(i64),
    DebugTaskCompletion(i64, Completion),
}
