//! Remote resource client for the task collection API.
//!
//! [`TodoApi`] is the seam between the list store and the transport: the
//! store only ever talks to this trait, [`todo::TodoClient`] implements it over
//! HTTP with `reqwest`, and tests substitute in-memory fakes.
//!
//! ## Error Model
//!
//! Failures are flat. Network errors, non-2xx statuses and
//! malformed bodies all become [`ApiError::Transport`]; a not-found item is
//! not distinguished from any other failure. [`ApiError::InvalidIdentifier`]
//! is raised locally before a request would be sent.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::BTreeSet;
//! use todo_cli::api::{todo::TodoClient, TodoApi};
//! use todo_cli::libs::config::ApiConfig;
//! use todo_cli::libs::todo::Category;
//!
//! # async fn run() -> Result<(), todo_cli::api::ApiError> {
//! let client = TodoClient::new(&ApiConfig::default())?;
//! let filters = BTreeSet::from([Category::Study]);
//! let todos = client.list_all(&filters).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::todo::{Category, CreateTodoRequest, Todo, UpdateTodoRequest};
use std::collections::BTreeSet;
use thiserror::Error;

pub mod todo;

pub use todo::TodoClient;

/// Errors produced by task API operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Any remote-call failure: unreachable host, non-2xx status, bad body.
    #[error("transport error: {0}")]
    Transport(String),
    /// Identifier missing or not positive; no request was made.
    #[error("invalid task identifier: {0}")]
    InvalidIdentifier(i64),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations on the remote task collection.
///
/// Every method is one request/response pair; none retries, none times out
/// beyond the transport's defaults.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// Fetches the collection, restricted to `filters` when non-empty.
    async fn list_all(&self, filters: &BTreeSet<Category>) -> ApiResult<Vec<Todo>>;

    /// Fetches one task.
    async fn get_by_id(&self, id: i64) -> ApiResult<Todo>;

    /// Creates a task; the server assigns its id and timestamp.
    async fn create(&self, request: &CreateTodoRequest) -> ApiResult<Todo>;

    /// Applies a partial update and returns the merged record.
    async fn update(&self, id: i64, request: &UpdateTodoRequest) -> ApiResult<Todo>;

    /// Flips the completion flag server-side.
    async fn toggle_completion(&self, id: i64) -> ApiResult<Todo>;

    /// Deletes a task. Deleting an already-deleted id fails.
    async fn delete_by_id(&self, id: i64) -> ApiResult<()>;
}
