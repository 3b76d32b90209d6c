#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use todo_cli::libs::messages::Message;
    use todo_cli::libs::store::{Intent, TodoState};
    use todo_cli::libs::todo::{Category, Todo};
    use todo_cli::libs::view::form::MAX_DESCRIPTION_LEN;
    use todo_cli::libs::view::{self, AppView, CategoryFilter, EditKey, TodoForm, TodoItem, TodoList};

    fn todo(id: i64, description: &str, completed: bool, category: Option<Category>) -> Todo {
        Todo {
            id,
            description: description.to_string(),
            completed,
            category,
            modified_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_form_defaults_and_blank_submit() {
        let mut form = TodoForm::new();
        assert_eq!(form.description(), "");
        assert_eq!(form.category(), Category::Study);
        assert_eq!(form.submit(), None);

        form.set_description("   ");
        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_form_submits_trimmed_description() {
        let mut form = TodoForm::new();
        form.set_description("  Read the async book  ");
        form.set_category(Category::ReadingDocs);

        assert_eq!(
            form.submit(),
            Some(Intent::Add {
                description: "Read the async book".to_string(),
                category: Category::ReadingDocs,
            })
        );
        // Submitting alone does not clear the input.
        assert_eq!(form.category(), Category::ReadingDocs);

        form.reset();
        assert_eq!(form, TodoForm::new());
    }

    #[test]
    fn test_form_truncates_long_input() {
        let mut form = TodoForm::new();
        let long = "é".repeat(MAX_DESCRIPTION_LEN + 5);

        assert!(form.set_description(&long));
        assert_eq!(form.description().chars().count(), MAX_DESCRIPTION_LEN);
        assert!(!form.set_description("short"));
    }

    #[test]
    fn test_item_commit_on_enter_and_blur() {
        let mut item = TodoItem::new(todo(4, "Draft", false, None));
        assert_eq!(item.edit_value(), "Draft");
        assert_eq!(item.handle_key(EditKey::Enter), None);

        item.begin_edit();
        item.input("  Final draft ");
        assert_eq!(
            item.handle_key(EditKey::Enter),
            Some(Intent::Update {
                id: 4,
                description: "Final draft".to_string(),
            })
        );
        assert!(!item.is_editing());

        item.begin_edit();
        item.input("Blurred");
        assert!(matches!(item.blur(), Some(Intent::Update { id: 4, .. })));
    }

    #[test]
    fn test_item_blank_edit_is_not_committed() {
        let mut item = TodoItem::new(todo(4, "Draft", false, None));
        item.begin_edit();
        item.input("   ");

        assert_eq!(item.blur(), None);
        assert!(item.is_editing());
    }

    #[test]
    fn test_item_escape_restores_original_text() {
        let mut item = TodoItem::new(todo(4, "Draft", false, None));
        item.begin_edit();
        item.input("Something else");

        assert_eq!(item.handle_key(EditKey::Escape), None);
        assert!(!item.is_editing());
        assert_eq!(item.edit_value(), "Draft");
    }

    #[test]
    fn test_item_buttons_and_labels() {
        let item = TodoItem::new(todo(9, "Ship it", true, Some(Category::CodingPractice)));

        assert_eq!(item.toggle(), Intent::Toggle(9));
        assert_eq!(item.delete(), Intent::Delete(9));
        assert_eq!(item.checkbox(), "[x]");
        assert_eq!(item.category_label(), "Coding Practice");
        assert_eq!(TodoItem::new(todo(1, "x", false, None)).category_label(), "Unclassified");
    }

    #[test]
    fn test_list_empty_state() {
        let mut list = TodoList::new();
        list.sync(&[]);
        assert!(list.is_empty());
        assert_eq!(list.render(), Message::TodosEmpty.to_string());
    }

    #[test]
    fn test_list_rows_are_keyed_by_id() {
        let mut list = TodoList::new();
        list.sync(&[todo(1, "One", false, None), todo(2, "Two", false, None)]);

        let row = list.row_mut(2).unwrap();
        row.begin_edit();
        row.input("Two, edited");

        // Server order changes, row 1 is gone, row 3 is new, row 2 keeps its edit.
        list.sync(&[todo(3, "Three", false, None), todo(2, "Two", true, None)]);

        let ids: Vec<i64> = list.rows().iter().map(TodoItem::id).collect();
        assert_eq!(ids, vec![3, 2]);
        let row = &list.rows()[1];
        assert!(row.is_editing());
        assert_eq!(row.edit_value(), "Two, edited");
        assert!(row.todo().completed);

        let table = list.render();
        assert!(table.contains("Three"));
        assert!(table.contains("Two, edited"));
        assert!(!table.contains("One"));
    }

    #[test]
    fn test_filter_toggles() {
        let mut filter = CategoryFilter::default();
        assert_eq!(filter.summary(), Message::FiltersNone);

        assert_eq!(filter.toggle(Category::Life), Intent::SetFilters(BTreeSet::from([Category::Life])));
        assert_eq!(
            filter.toggle(Category::Study),
            Intent::SetFilters(BTreeSet::from([Category::Study, Category::Life]))
        );
        assert_eq!(filter.toggle(Category::Life), Intent::SetFilters(BTreeSet::from([Category::Study])));

        assert_eq!(filter.toggles().len(), Category::ALL.len());
        assert!(filter.render().starts_with("[x] Study  [ ] Project"));
        assert_eq!(filter.summary().to_string(), "Filter: Study");
    }

    #[test]
    fn test_app_view_sections() {
        let mut state = TodoState {
            todos: vec![todo(1, "Buy milk", true, Some(Category::Life)), todo(2, "Read", false, None)],
            ..Default::default()
        };
        let mut screen = AppView::new();

        let rendered = screen.render(&state);
        assert!(rendered.contains("Completed: 1 / Total: 2"));
        assert!(rendered.contains("Buy milk"));
        assert!(view::error_banner(&state).is_none());

        state.loading = true;
        state.error = Some(Message::FetchTodosFailed);
        let rendered = screen.render(&state);
        assert!(rendered.contains("Loading..."));
        assert!(!rendered.contains("Buy milk"));
        assert!(rendered.contains("Failed to load the task list."));
        assert_eq!(view::dismiss_error(), Intent::DismissError);
    }

    #[test]
    fn test_app_view_rejected_edit_survives_refresh() {
        let mut state = TodoState {
            todos: vec![todo(1, "One", false, None), todo(2, "Two", false, None)],
            ..Default::default()
        };
        let mut screen = AppView::new();
        screen.render(&state);

        assert_eq!(screen.begin_edit(&state.todos, 2), Some("Two".to_string()));
        assert_eq!(
            screen.end_edit(2, "Two, edited"),
            Some(Intent::Update {
                id: 2,
                description: "Two, edited".to_string(),
            })
        );
        screen.reopen_edit(2, "Two, edited");

        // Refresh with a new order and a new row.
        state.todos = vec![todo(3, "Three", false, None), todo(2, "Two", true, None)];
        let rendered = screen.render(&state);
        assert!(rendered.contains("✏️ Two, edited"));

        assert_eq!(screen.begin_edit(&state.todos, 2), Some("Two, edited".to_string()));
        assert_eq!(screen.end_edit(2, "   "), None);
        assert!(!screen.list().rows()[1].is_editing());
        assert_eq!(screen.list().rows()[1].edit_value(), "Two");
    }

    #[test]
    fn test_app_view_edit_of_unknown_row() {
        let mut screen = AppView::new();
        assert_eq!(screen.begin_edit(&[todo(1, "One", false, None)], 7), None);
        assert_eq!(screen.end_edit(7, "text"), None);
    }
}
