#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u32, String), // id, title
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFoundWithId(u32),
    TaskUnchanged(u32),
    TitleRequired,
    CompletedTasksCleared(usize),
    NoCompletedTasks,
    TasksHeader(usize),
    NoTasksMatchFilters,
    WelcomeHeader,
    WelcomeGettingStarted,
    QuickstartSeeded(usize),

    // === VIEW MESSAGES ===
    ViewModeChanged(String),
    CategoryFilterChanged(String),
    StatsHeader,
    CurrentFilters(String, String), // view mode, category

    // === SESSION MESSAGES ===
    SessionStarted,
    SessionEnded(usize), // tasks discarded

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String),
    ExportFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseFailed(String, String), // path, error
    ConfigModuleDefaults,
    ConfigModuleExport,
    ConfigModuleSession,

    // === VALIDATION MESSAGES ===
    InvalidDate(String),
    DueDateInPast(String),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptSelectAction,
    PromptSelectTask,
    PromptViewMode,
    PromptCategoryFilter,
    PromptExportFormat,
    PromptExportDirectory,
    PromptSeedExamples,
    PromptSelectModules,
    ConfirmDeleteTask(String),
    ConfirmClearCompleted(usize),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
