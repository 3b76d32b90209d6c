//! Display implementation for application messages.
//!
//! Single source of truth for user-facing text. Store error messages are
//! fixed per operation so the error slot reads the same regardless of the
//! underlying transport failure; the cause goes to the diagnostics log.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TodoCreated(id) => format!("Task #{} created", id),
            Message::TodoUpdated(id) => format!("Task #{} updated", id),
            Message::TodoDeleted(id) => format!("Task #{} deleted", id),
            Message::TodoCompleted(id) => format!("Task #{} marked as done", id),
            Message::TodoReopened(id) => format!("Task #{} marked as not done", id),
            Message::TodosEmpty => "Nothing to do. Add a new task to get started! ✨".to_string(),
            Message::TodosLoading => "Loading...".to_string(),
            Message::TodoStats { completed, total } => format!("Completed: {} / Total: {}", completed, total),
            Message::Unclassified => "Unclassified".to_string(),

            // === STORE ERROR MESSAGES ===
            Message::FetchTodosFailed => "Failed to load the task list.".to_string(),
            Message::FetchTodoFailed => "Failed to load the task.".to_string(),
            Message::AddTodoFailed => "Failed to add the task.".to_string(),
            Message::ToggleTodoFailed => "Failed to change the task status.".to_string(),
            Message::UpdateTodoFailed => "Failed to update the task.".to_string(),
            Message::DeleteTodoFailed => "Failed to delete the task.".to_string(),
            Message::InvalidTodoId => "Invalid task ID.".to_string(),

            // === FORM MESSAGES ===
            Message::DescriptionRequired => "Task description must not be empty".to_string(),
            Message::DescriptionTruncated(max) => format!("Task description was cut to {} characters", max),

            // === FILTER MESSAGES ===
            Message::FiltersActive(categories) => format!("Filter: {}", categories),
            Message::FiltersNone => "Filter: all categories".to_string(),

            // === INTERACTIVE SESSION MESSAGES ===
            Message::AppTitle => "📝 Todo List".to_string(),
            Message::AppGoodbye => "Bye!".to_string(),
            Message::ErrorDismissed => "Error dismissed".to_string(),
            Message::NoTodosToSelect => "There are no tasks to choose from".to_string(),
            Message::SelectAction => "What do you want to do?".to_string(),
            Message::SelectTodo => "Select a task".to_string(),
            Message::SelectCategory => "Select a category".to_string(),
            Message::SelectFilters => "Select categories to show (none = all)".to_string(),
            Message::PromptDescription => "Enter a task".to_string(),
            Message::PromptEditDescription => "Edit the task (leave empty to cancel)".to_string(),
            Message::ActionAdd => "Add a task".to_string(),
            Message::ActionToggle => "Toggle done".to_string(),
            Message::ActionEdit => "Edit a task".to_string(),
            Message::ActionDelete => "Delete a task".to_string(),
            Message::ActionFilter => "Filter by category".to_string(),
            Message::ActionDismissError => "Dismiss error".to_string(),
            Message::ActionRefresh => "Refresh".to_string(),
            Message::ActionQuit => "Quit".to_string(),
            Message::ConfirmDeleteTodo(description) => format!("Delete '{}'?", description),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Task API settings".to_string(),
            Message::PromptApiUrl => "Enter the task API base URL".to_string(),
            Message::InvalidApiUrl(url) => format!("'{}' is not a valid http(s) URL", url),
            Message::ApiUrlInUse(url) => format!("Using task API at {}", url),
        };
        write!(f, "{}", text)
    }
}
