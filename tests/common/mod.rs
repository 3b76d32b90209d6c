#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashSet};
use todo_cli::api::{ApiError, ApiResult, TodoApi};
use todo_cli::libs::todo::{Category, CreateTodoRequest, Todo, UpdateTodoRequest};

/// Operations of the fake, used to script failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Toggle,
    Delete,
}

/// A request as received by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(BTreeSet<Category>),
    Get(i64),
    Create(CreateTodoRequest),
    Update(i64, UpdateTodoRequest),
    Toggle(i64),
    Delete(i64),
}

/// In-memory stand-in for the task server.
///
/// Behaves like the real resource (ids and timestamps assigned on create,
/// unknown ids fail) and records every call.
#[derive(Debug, Default)]
pub struct FakeApi {
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<i64>,
    failing: RefCell<HashSet<Op>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        Self {
            todos: RefCell::new(todos),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    pub fn fail_on(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.borrow_mut().remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|call| matches!(call, Call::List(_))).count()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    fn timestamp(&self) -> String {
        format!("2024-01-01T00:00:{:02}Z", self.calls.borrow().len() % 60)
    }

    fn check(&self, op: Op, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&op) {
            return Err(ApiError::Transport(format!("scripted {:?} failure", op)));
        }
        Ok(())
    }

    fn not_found(id: i64) -> ApiError {
        ApiError::Transport(format!("HTTP status client error (404 Not Found) for task {}", id))
    }

    fn modify(&self, id: i64, change: impl FnOnce(&mut Todo)) -> ApiResult<Todo> {
        let timestamp = self.timestamp();
        let mut todos = self.todos.borrow_mut();
        let todo = todos.iter_mut().find(|todo| todo.id == id).ok_or_else(|| Self::not_found(id))?;
        change(todo);
        todo.modified_at = timestamp;
        Ok(todo.clone())
    }
}

impl TodoApi for FakeApi {
    async fn list_all(&self, filters: &BTreeSet<Category>) -> ApiResult<Vec<Todo>> {
        self.check(Op::List, Call::List(filters.clone()))?;
        Ok(self
            .todos
            .borrow()
            .iter()
            .filter(|todo| filters.is_empty() || todo.category.map_or(false, |category| filters.contains(&category)))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> ApiResult<Todo> {
        self.check(Op::Get, Call::Get(id))?;
        self.todos.borrow().iter().find(|todo| todo.id == id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, request: &CreateTodoRequest) -> ApiResult<Todo> {
        self.check(Op::Create, Call::Create(request.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let todo = Todo {
            id,
            description: request.description.clone(),
            completed: request.completed,
            category: Some(request.category),
            modified_at: self.timestamp(),
        };
        self.todos.borrow_mut().push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, request: &UpdateTodoRequest) -> ApiResult<Todo> {
        self.check(Op::Update, Call::Update(id, request.clone()))?;
        self.modify(id, |todo| {
            if let Some(description) = &request.description {
                todo.description = description.clone();
            }
            if let Some(completed) = request.completed {
                todo.completed = completed;
            }
            if let Some(category) = request.category {
                todo.category = Some(category);
            }
        })
    }

    async fn toggle_completion(&self, id: i64) -> ApiResult<Todo> {
        self.check(Op::Toggle, Call::Toggle(id))?;
        self.modify(id, |todo| todo.completed = !todo.completed)
    }

    async fn delete_by_id(&self, id: i64) -> ApiResult<()> {
        self.check(Op::Delete, Call::Delete(id))?;
        let mut todos = self.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

pub fn todo(id: i64, description: &str, completed: bool, category: Option<Category>) -> Todo {
    Todo {
        id,
        description: description.to_string(),
        completed,
        category,
        modified_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

/// Three tasks in server order: 1 Study, 2 Life (done), 3 unclassified.
pub fn seed() -> Vec<Todo> {
    vec![
        todo(1, "Read the Rust book", false, Some(Category::Study)),
        todo(2, "Buy milk", true, Some(Category::Life)),
        todo(3, "Call the bank", false, None),
    ]
}
