//! List state manager: the single owner of the task collection.
//!
//! [`TodoStore`] holds what gets rendered (tasks, loading flag, error slot,
//! active filters), runs the remote call behind each user action and then
//! reconciles the local collection with the result.
//!
//! ## Reconciliation Rules
//!
//! - **refresh**: replaces the whole collection; keeps it on failure
//! - **add**: appends the created record at the end, never re-sorts
//! - **toggle / update / load_one**: replace the matching record in place,
//!   if it is listed
//! - **remove**: drops the matching record
//!
//! Failures never touch the collection. They are logged with their cause and
//! collapse into one operation-specific [`Message`] in the error slot; the
//! last error wins and nothing is retried.
//!
//! ## Observers
//!
//! Views subscribe with [`TodoStore::subscribe`] and receive a read-only
//! [`TodoState`] after every change. Mutation goes through the store methods
//! or [`TodoStore::dispatch`] only.
//!
//! All methods take `&mut self`, so calls on one store are sequenced; there is
//! no cancellation of a call once started.

use crate::api::{ApiError, TodoApi};
use crate::libs::messages::Message;
use crate::libs::todo::{Category, CreateTodoRequest, Todo, UpdateTodoRequest};
use std::collections::BTreeSet;
use tracing::{debug, error};

/// Snapshot of everything the views render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    /// Server response order, then local appends.
    pub todos: Vec<Todo>,
    pub loading: bool,
    pub error: Option<Message>,
    /// Empty means no filtering.
    pub filters: BTreeSet<Category>,
}

impl TodoState {
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }
}

/// A user action raised by a presentation component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { description: String, category: Category },
    Toggle(i64),
    Update { id: i64, description: String },
    Delete(i64),
    SetFilters(BTreeSet<Category>),
    Refresh,
    DismissError,
}

pub type SubscriptionId = usize;

type Listener = Box<dyn FnMut(&TodoState)>;

pub struct TodoStore<A: TodoApi> {
    api: A,
    state: TodoState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl<A: TodoApi> TodoStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TodoState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn todos(&self) -> &[Todo] {
        &self.state.todos
    }

    pub fn error(&self) -> Option<&Message> {
        self.state.error.as_ref()
    }

    pub fn completed_count(&self) -> usize {
        self.state.completed_count()
    }

    pub fn total_count(&self) -> usize {
        self.state.total_count()
    }

    /// Registers a listener called with the new state after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(subscription, _)| *subscription != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }

    fn fail(&mut self, message: Message, cause: &ApiError) {
        error!(error = %cause, "{}", message);
        self.state.error = Some(message);
        self.notify();
    }

    fn replace(&mut self, todo: Todo) {
        match self.state.todos.iter_mut().find(|current| current.id == todo.id) {
            Some(current) => *current = todo,
            None => debug!(id = todo.id, "updated task is not in the local list"),
        }
        self.notify();
    }

    /// Refetches the collection with the current filters.
    ///
    /// Loading is set before the call and cleared exactly once after it,
    /// whatever the outcome. Returns whether the fetch succeeded.
    pub async fn refresh(&mut self) -> bool {
        self.state.loading = true;
        self.notify();

        let result = self.api.list_all(&self.state.filters).await;
        self.state.loading = false;

        match result {
            Ok(todos) => {
                debug!(count = todos.len(), "task list fetched");
                self.state.todos = todos;
                self.state.error = None;
                self.notify();
                true
            }
            Err(cause) => {
                self.fail(Message::FetchTodosFailed, &cause);
                false
            }
        }
    }

    /// Creates a task and appends the server's record to the list.
    pub async fn add(&mut self, description: &str, category: Category) -> bool {
        let request = CreateTodoRequest::new(description, category);
        match self.api.create(&request).await {
            Ok(todo) => {
                debug!(id = todo.id, "task created");
                self.state.todos.push(todo);
                self.notify();
                true
            }
            Err(cause) => {
                self.fail(Message::AddTodoFailed, &cause);
                false
            }
        }
    }

    /// Flips completion of task `id` and returns the server's record.
    ///
    /// Non-positive ids are rejected without a request.
    pub async fn toggle(&mut self, id: i64) -> Option<Todo> {
        if id <= 0 {
            self.fail(Message::InvalidTodoId, &ApiError::InvalidIdentifier(id));
            return None;
        }

        match self.api.toggle_completion(id).await {
            Ok(todo) => {
                self.replace(todo.clone());
                Some(todo)
            }
            Err(cause) => {
                self.fail(Message::ToggleTodoFailed, &cause);
                None
            }
        }
    }

    /// Replaces the description of task `id`. Other fields are not sent.
    pub async fn update(&mut self, id: i64, description: &str) -> bool {
        match self.api.update(id, &UpdateTodoRequest::description(description)).await {
            Ok(todo) => {
                self.replace(todo);
                true
            }
            Err(cause) => {
                self.fail(Message::UpdateTodoFailed, &cause);
                false
            }
        }
    }

    /// Deletes task `id` remotely, then locally.
    pub async fn remove(&mut self, id: i64) -> bool {
        match self.api.delete_by_id(id).await {
            Ok(()) => {
                self.state.todos.retain(|todo| todo.id != id);
                self.notify();
                true
            }
            Err(cause) => {
                self.fail(Message::DeleteTodoFailed, &cause);
                false
            }
        }
    }

    /// Fetches one task and patches the local copy if it is listed.
    ///
    /// Tasks outside the current (filtered) list are returned without being
    /// inserted.
    pub async fn load_one(&mut self, id: i64) -> Option<Todo> {
        match self.api.get_by_id(id).await {
            Ok(todo) => {
                if self.state.find(id).is_some() {
                    self.replace(todo.clone());
                }
                Some(todo)
            }
            Err(cause) => {
                self.fail(Message::FetchTodoFailed, &cause);
                None
            }
        }
    }

    /// Replaces the active filter set and refetches once.
    pub async fn set_filters(&mut self, filters: BTreeSet<Category>) -> bool {
        self.state.filters = filters;
        self.refresh().await
    }

    /// Clears the error slot. The failed operation is not retried.
    pub fn dismiss_error(&mut self) {
        if self.state.error.take().is_some() {
            self.notify();
        }
    }

    /// Performs the operation behind a view intent.
    pub async fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Add { description, category } => self.add(&description, category).await,
            Intent::Toggle(id) => self.toggle(id).await.is_some(),
            Intent::Update { id, description } => self.update(id, &description).await,
            Intent::Delete(id) => self.remove(id).await,
            Intent::SetFilters(filters) => self.set_filters(filters).await,
            Intent::Refresh => self.refresh().await,
            Intent::DismissError => {
                self.dismiss_error();
                true
            }
        }
    }
}
