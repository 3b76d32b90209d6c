//! Presentation components.
//!
//! Components keep only transient input state (form text, edit buffers,
//! filter toggles). They read records through `&Todo`/`&TodoState` and turn
//! user actions into [`Intent`] values for the store; none of them can reach
//! the network or mutate the collection.
//!
//! ```rust
//! use todo_cli::libs::store::{Intent, TodoState};
//! use todo_cli::libs::todo::Category;
//! use todo_cli::libs::view::{AppView, TodoForm};
//!
//! let mut form = TodoForm::new();
//! form.set_description("  Buy milk ");
//! form.set_category(Category::Life);
//! assert_eq!(
//!     form.submit(),
//!     Some(Intent::Add { description: "Buy milk".to_string(), category: Category::Life })
//! );
//!
//! let screen = AppView::new().render(&TodoState::default());
//! assert!(screen.contains("Completed: 0 / Total: 0"));
//! ```

pub mod filter;
pub mod form;
pub mod item;
pub mod list;

pub use filter::CategoryFilter;
pub use form::TodoForm;
pub use item::{EditKey, TodoItem};
pub use list::TodoList;

use crate::libs::messages::Message;
use crate::libs::store::{Intent, TodoState};
use crate::libs::todo::Todo;

/// Whole-screen view: header with stats, error banner, filter line, then the
/// list or a loading indicator.
#[derive(Debug, Clone, Default)]
pub struct AppView {
    list: TodoList,
}

impl AppView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Opens the inline editor of row `id` and returns its buffer.
    ///
    /// A buffer left open by an earlier rejected commit is kept.
    pub fn begin_edit(&mut self, todos: &[Todo], id: i64) -> Option<String> {
        self.list.sync(todos);
        let row = self.list.row_mut(id)?;
        row.begin_edit();
        Some(row.edit_value().to_string())
    }

    /// Feeds one answer to the open editor of row `id`. Blank text stands in
    /// for Escape, anything else is typed and committed with Enter.
    pub fn end_edit(&mut self, id: i64, text: &str) -> Option<Intent> {
        let row = self.list.row_mut(id)?;
        if text.trim().is_empty() {
            return row.handle_key(EditKey::Escape);
        }
        row.input(text);
        row.handle_key(EditKey::Enter)
    }

    /// Puts `text` back into the editor of row `id` after the store rejected
    /// the commit.
    pub fn reopen_edit(&mut self, id: i64, text: &str) {
        if let Some(row) = self.list.row_mut(id) {
            row.begin_edit();
            row.input(text);
        }
    }

    pub fn render(&mut self, state: &TodoState) -> String {
        let mut lines = vec![header(state)];
        if let Some(banner) = error_banner(state) {
            lines.push(banner);
        }
        lines.push(CategoryFilter::new(state.filters.clone()).summary().to_string());

        if state.loading {
            lines.push(Message::TodosLoading.to_string());
        } else {
            self.list.sync(&state.todos);
            lines.push(self.list.render());
        }
        lines.join("\n")
    }
}

/// Title and `Completed: n / Total: m` line.
pub fn header(state: &TodoState) -> String {
    format!(
        "{}\n{}",
        Message::AppTitle,
        Message::TodoStats {
            completed: state.completed_count(),
            total: state.total_count(),
        }
    )
}

/// The error slot, rendered with its dismiss hint, if set.
pub fn error_banner(state: &TodoState) -> Option<String> {
    state.error.as_ref().map(|message| format!("❌ {} [✕]", message))
}

/// Dismiss button of the error banner.
pub fn dismiss_error() -> Intent {
    Intent::DismissError
}
