/// Every user-facing message of the application.
///
/// Variants carrying data format it in their `Display` implementation, see
/// [`super::display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TodoCreated(i64),
    TodoUpdated(i64),
    TodoDeleted(i64),
    TodoCompleted(i64),
    TodoReopened(i64),
    TodosEmpty,
    TodosLoading,
    TodoStats { completed: usize, total: usize },
    Unclassified,

    // === STORE ERROR MESSAGES ===
    FetchTodosFailed,
    FetchTodoFailed,
    AddTodoFailed,
    ToggleTodoFailed,
    UpdateTodoFailed,
    DeleteTodoFailed,
    InvalidTodoId,

    // === FORM MESSAGES ===
    DescriptionRequired,
    DescriptionTruncated(usize), // max length

    // === FILTER MESSAGES ===
    FiltersActive(String),
    FiltersNone,

    // === INTERACTIVE SESSION MESSAGES ===
    AppTitle,
    AppGoodbye,
    ErrorDismissed,
    NoTodosToSelect,
    SelectAction,
    SelectTodo,
    SelectCategory,
    SelectFilters,
    PromptDescription,
    PromptEditDescription,
    ActionAdd,
    ActionToggle,
    ActionEdit,
    ActionDelete,
    ActionFilter,
    ActionDismissError,
    ActionRefresh,
    ActionQuit,
    ConfirmDeleteTodo(String),
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    PromptApiUrl,
    InvalidApiUrl(String),
    ApiUrlInUse(String),
}
