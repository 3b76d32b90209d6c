use crate::libs::store::Intent;
use crate::libs::todo::{format_category, format_modified, Todo};
use prettytable::{row, Row};

/// Keys the inline editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

/// One row of the list, with its own inline-edit state.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    todo: Todo,
    editing: bool,
    edit_value: String,
}

impl TodoItem {
    pub fn new(todo: Todo) -> Self {
        let edit_value = todo.description.clone();
        Self {
            todo,
            editing: false,
            edit_value,
        }
    }

    pub fn id(&self) -> i64 {
        self.todo.id
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn edit_value(&self) -> &str {
        &self.edit_value
    }

    /// Takes a fresh copy of the record. The edit buffer is kept while editing.
    pub fn set_todo(&mut self, todo: Todo) {
        if !self.editing {
            self.edit_value = todo.description.clone();
        }
        self.todo = todo;
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn input(&mut self, text: &str) {
        self.edit_value = text.to_string();
    }

    /// Commits the edit buffer.
    ///
    /// A blank buffer is not committed and edit mode stays on.
    pub fn commit(&mut self) -> Option<Intent> {
        if !self.editing {
            return None;
        }
        let description = self.edit_value.trim();
        if description.is_empty() {
            return None;
        }
        let intent = Intent::Update {
            id: self.todo.id,
            description: description.to_string(),
        };
        self.editing = false;
        Some(intent)
    }

    /// Leaves edit mode and restores the record's description.
    pub fn cancel(&mut self) {
        self.edit_value = self.todo.description.clone();
        self.editing = false;
    }

    /// Focus left the editor: same as committing.
    pub fn blur(&mut self) -> Option<Intent> {
        self.commit()
    }

    pub fn handle_key(&mut self, key: EditKey) -> Option<Intent> {
        match key {
            EditKey::Enter => self.commit(),
            EditKey::Escape => {
                self.cancel();
                None
            }
        }
    }

    pub fn toggle(&self) -> Intent {
        Intent::Toggle(self.todo.id)
    }

    pub fn delete(&self) -> Intent {
        Intent::Delete(self.todo.id)
    }

    pub fn checkbox(&self) -> &'static str {
        if self.todo.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    pub fn category_label(&self) -> String {
        format_category(self.todo.category)
    }

    /// Table row: checkbox, id, description (edit buffer while editing),
    /// category, modification time.
    pub fn render(&self) -> Row {
        let description = if self.editing {
            format!("✏️ {}", self.edit_value)
        } else {
            self.todo.description.clone()
        };
        row![
            self.checkbox(),
            self.todo.id,
            description,
            self.category_label(),
            format_modified(&self.todo.modified_at)
        ]
    }
}
