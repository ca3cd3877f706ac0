#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),              // title
    TaskUpdated(String),              // title
    TaskDeleted,
    TaskStatusChanged(String, String), // title, status
    TaskRolledForward(String, String), // title, next due date
    NoTasksFound,
    NoChangesDetected,
    ConfirmDeleteTask(String), // title
    ConfirmClearAll(usize),
    TasksCleared,
    OperationCancelled,
    TasksSummary {
        total: usize,
        recurring: usize,
        in_progress: usize,
        completed: usize,
    },
    InvalidDate(String),

    // === EXPORT MESSAGES ===
    ExportingTasks(usize, String), // count, format
    ExportCompleted(String),       // path

    // === ADVISOR MESSAGES ===
    AdvisorAnalyzing(usize),
    AdvisorHeader,
    AdvisorNoTasks,
    AdvisorReviewNote,
    SubtasksHeader(String), // title
    NoSubtasks,
    ApiKeySaved,
    ApiKeyRemoved,
    ApiKeyMissing,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleAi,
    ConfigModuleTasks,
    PromptSelectModules,
    PromptAiApiUrl,
    PromptAiModel,
    PromptAiTemperature,
    PromptAiSubtaskCount,
    PromptDefaultCategory,
    PromptDefaultPriority,
}
