//! Text for every user-facing [`Message`].
//!
//! All wording lives in this one match so commands never build ad-hoc
//! strings for the terminal.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted => "Task deleted".to_string(),
            Message::TaskStatusChanged(title, status) => format!("Task '{}' is now {}", title, status),
            Message::TaskRolledForward(title, due) => format!("Task '{}' completed this cycle, next due {}", title, due),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmClearAll(count) => format!("Remove all {} tasks? This cannot be undone.", count),
            Message::TasksCleared => "All tasks removed".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::TasksSummary {
                total,
                recurring,
                in_progress,
                completed,
            } => format!(
                "Managing {} tasks: {} recurring, {} in progress, {} completed",
                total, recurring, in_progress, completed
            ),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),

            // === EXPORT MESSAGES ===
            Message::ExportingTasks(count, format) => format!("Exporting {} tasks as {}", count, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === ADVISOR MESSAGES ===
            Message::AdvisorAnalyzing(count) => format!("Analyzing {} tasks to optimize your workflow...", count),
            Message::AdvisorHeader => "Smart Analysis".to_string(),
            Message::AdvisorNoTasks => "Add more tasks to get AI-powered strategic advice.".to_string(),
            Message::AdvisorReviewNote => "Always review AI suggestions before applying significant schedule changes.".to_string(),
            Message::SubtasksHeader(title) => format!("Suggested steps for '{}':", title),
            Message::NoSubtasks => "No subtask suggestions available".to_string(),
            Message::ApiKeySaved => "API key saved".to_string(),
            Message::ApiKeyRemoved => "API key removed".to_string(),
            Message::ApiKeyMissing => "No Gemini API key found. Set GEMINI_API_KEY or run 'sheettask login'.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleAi => "AI advisor settings".to_string(),
            Message::ConfigModuleTasks => "Task defaults".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptAiApiUrl => "Gemini API URL".to_string(),
            Message::PromptAiModel => "Model".to_string(),
            Message::PromptAiTemperature => "Temperature".to_string(),
            Message::PromptAiSubtaskCount => "Number of subtasks to suggest".to_string(),
            Message::PromptDefaultCategory => "Default category".to_string(),
            Message::PromptDefaultPriority => "Default priority".to_string(),
        };
        write!(f, "{}", text)
    }
}
