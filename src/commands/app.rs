//! Interactive session.
//!
//! Fetches the list once on start, then loops over an action menu. The screen
//! is redrawn by a store subscriber after every state change; the menu only
//! collects input through the view components and dispatches their intents.

use super::connect;
use crate::api::TodoClient;
use crate::libs::messages::Message;
use crate::libs::store::{Intent, TodoState, TodoStore};
use crate::libs::todo::{format_category, Category};
use crate::libs::view::form::MAX_DESCRIPTION_LEN;
use crate::libs::view::{self, AppView, CategoryFilter, TodoForm, TodoItem};
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Toggle,
    Edit,
    Delete,
    Filter,
    DismissError,
    Refresh,
    Quit,
}

impl Action {
    pub fn label(&self) -> Message {
        match self {
            Action::Add => Message::ActionAdd,
            Action::Toggle => Message::ActionToggle,
            Action::Edit => Message::ActionEdit,
            Action::Delete => Message::ActionDelete,
            Action::Filter => Message::ActionFilter,
            Action::DismissError => Message::ActionDismissError,
            Action::Refresh => Message::ActionRefresh,
            Action::Quit => Message::ActionQuit,
        }
    }
}

/// Menu entries for the current state. Dismiss only shows with an error.
pub fn available_actions(state: &TodoState) -> Vec<Action> {
    let mut actions = vec![Action::Add, Action::Toggle, Action::Edit, Action::Delete, Action::Filter];
    if state.error.is_some() {
        actions.push(Action::DismissError);
    }
    actions.push(Action::Refresh);
    actions.push(Action::Quit);
    actions
}

pub async fn cmd() -> Result<()> {
    let mut store = connect()?;

    let screen = Rc::new(RefCell::new(AppView::new()));
    let painter = Rc::clone(&screen);
    store.subscribe(move |state| {
        let rendered = painter.borrow_mut().render(state);
        msg_print!(rendered, true);
    });

    let mut form = TodoForm::new();
    let mut filter = CategoryFilter::default();
    store.refresh().await;

    loop {
        let actions = available_actions(store.state());
        let labels: Vec<String> = actions.iter().map(|action| action.label().to_string()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            Action::Add => add(&mut store, &mut form).await?,
            Action::Toggle => {
                if let Some(item) = select_todo(store.state())? {
                    store.dispatch(item.toggle()).await;
                }
            }
            Action::Edit => edit(&mut store, &screen).await?,
            Action::Delete => delete(&mut store).await?,
            Action::Filter => {
                let intent = choose_filters(&mut filter)?;
                store.dispatch(intent).await;
            }
            Action::DismissError => {
                store.dispatch(view::dismiss_error()).await;
                msg_info!(Message::ErrorDismissed);
            }
            Action::Refresh => {
                store.dispatch(Intent::Refresh).await;
            }
            Action::Quit => {
                msg_print!(Message::AppGoodbye);
                break;
            }
        }
    }
    Ok(())
}

async fn add(store: &mut TodoStore<TodoClient>, form: &mut TodoForm) -> Result<()> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .with_initial_text(form.description())
        .allow_empty(true)
        .interact_text()?;
    if form.set_description(&text) {
        msg_warning!(Message::DescriptionTruncated(MAX_DESCRIPTION_LEN));
    }

    let labels: Vec<String> = Category::ALL.iter().map(Category::label).collect();
    let current = Category::ALL.iter().position(|category| *category == form.category()).unwrap_or(0);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectCategory.to_string())
        .items(&labels)
        .default(current)
        .interact()?;
    if let Some(category) = Category::ALL.get(index) {
        form.set_category(*category);
    }

    match form.submit() {
        Some(intent) => {
            // Input is kept on failure so the user can retry it.
            if store.dispatch(intent).await {
                form.reset();
            }
        }
        None => msg_warning!(Message::DescriptionRequired),
    }
    Ok(())
}

/// Edits through the screen's keyed row, so an answer the server rejects
/// stays in that row's editor across redraws and refreshes.
async fn edit(store: &mut TodoStore<TodoClient>, screen: &RefCell<AppView>) -> Result<()> {
    let Some(id) = select_todo(store.state())?.map(|item| item.id()) else {
        return Ok(());
    };
    let Some(initial) = screen.borrow_mut().begin_edit(&store.state().todos, id) else {
        return Ok(());
    };

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEditDescription.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;

    let intent = screen.borrow_mut().end_edit(id, &text);
    match intent {
        Some(intent) => {
            if !store.dispatch(intent).await {
                screen.borrow_mut().reopen_edit(id, &text);
            }
        }
        None => msg_info!(Message::OperationCancelled),
    }
    Ok(())
}

async fn delete(store: &mut TodoStore<TodoClient>) -> Result<()> {
    let Some(item) = select_todo(store.state())? else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTodo(item.todo().description.clone()).to_string())
        .default(false)
        .interact()?;
    if confirmed {
        store.dispatch(item.delete()).await;
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

/// Lets the user pick a task; `None` when the list is empty or the prompt
/// was escaped.
fn select_todo(state: &TodoState) -> Result<Option<TodoItem>> {
    if state.todos.is_empty() {
        msg_info!(Message::NoTodosToSelect);
        return Ok(None);
    }

    let labels: Vec<String> = state
        .todos
        .iter()
        .map(|todo| {
            format!(
                "{} #{} {} ({})",
                if todo.completed { "[x]" } else { "[ ]" },
                todo.id,
                todo.description,
                format_category(todo.category)
            )
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTodo.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|index| state.todos.get(index)).map(|todo| TodoItem::new(todo.clone())))
}

fn choose_filters(filter: &mut CategoryFilter) -> Result<Intent> {
    let toggles = filter.toggles();
    let labels: Vec<String> = toggles.iter().map(|(category, _)| category.label()).collect();
    let checked: Vec<bool> = toggles.iter().map(|(_, checked)| *checked).collect();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectFilters.to_string())
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    Ok(filter.select(chosen.into_iter().filter_map(|index| Category::ALL.get(index).copied())))
}
