use super::item::TodoItem;
use crate::libs::messages::Message;
use crate::libs::todo::Todo;
use prettytable::{row, Table};

/// List container: one [`TodoItem`] per record, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    rows: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles rows with `todos` by id.
    ///
    /// Rows follow the order of `todos`; a row whose id survives keeps its
    /// edit state, rows for vanished ids are dropped.
    pub fn sync(&mut self, todos: &[Todo]) {
        let mut previous = std::mem::take(&mut self.rows);
        self.rows = todos
            .iter()
            .map(|todo| match previous.iter().position(|row| row.id() == todo.id) {
                Some(index) => {
                    let mut row = previous.swap_remove(index);
                    row.set_todo(todo.clone());
                    row
                }
                None => TodoItem::new(todo.clone()),
            })
            .collect();
    }

    pub fn rows(&self) -> &[TodoItem] {
        &self.rows
    }

    pub fn row_mut(&mut self, id: i64) -> Option<&mut TodoItem> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return Message::TodosEmpty.to_string();
        }

        let mut table = Table::new();
        table.set_titles(row!["DONE", "ID", "DESCRIPTION", "CATEGORY", "MODIFIED"]);
        for item in &self.rows {
            table.add_row(item.render());
        }
        table.to_string()
    }
}
