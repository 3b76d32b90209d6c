//! HTTP implementation of [`TodoApi`].
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/{base}?category=..&category=..` |
//! | get one | GET | `/{base}/{id}` |
//! | create | POST | `/{base}` |
//! | update | PATCH | `/{base}/{id}` |
//! | toggle | PATCH | `/{base}/{id}/completed` |
//! | delete | DELETE | `/{base}/{id}` |

use super::{ApiResult, TodoApi};
use crate::libs::config::ApiConfig;
use crate::libs::data_storage::{APP_NAME, APP_VERSION};
use crate::libs::todo::{Category, CreateTodoRequest, Todo, UpdateTodoRequest};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use tracing::debug;

/// Query parameter carrying one category filter; repeated per category.
const CATEGORY_PARAM: &str = "category";

/// Suffix of the toggle route, appended to the item path.
const TOGGLE_SUFFIX: &str = "completed";

/// `reqwest`-backed client for the task collection resource.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
}

impl TodoClient {
    /// Builds a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Rejects non-2xx statuses, then decodes the JSON body.
    async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

/// `User-Agent` sent with every request.
pub fn user_agent() -> String {
    format!("{}/{}", APP_NAME, APP_VERSION)
}

/// Query pairs for a filter set: one `category` pair per selected category.
pub fn filter_query(filters: &BTreeSet<Category>) -> Vec<(&'static str, &'static str)> {
    filters.iter().map(|category| (CATEGORY_PARAM, category.as_str())).collect()
}

impl TodoApi for TodoClient {
    async fn list_all(&self, filters: &BTreeSet<Category>) -> ApiResult<Vec<Todo>> {
        let mut request = self.client.get(&self.base_url);
        if !filters.is_empty() {
            request = request.query(&filter_query(filters));
        }
        debug!(url = %self.base_url, filters = filters.len(), "GET task list");

        let response = request.send().await?;
        debug!(status = %response.status(), "task list response");
        Self::read(response).await
    }

    async fn get_by_id(&self, id: i64) -> ApiResult<Todo> {
        let url = self.item_url(id);
        debug!(%url, "GET task");

        let response = self.client.get(&url).send().await?;
        debug!(status = %response.status(), id, "task response");
        Self::read(response).await
    }

    async fn create(&self, request: &CreateTodoRequest) -> ApiResult<Todo> {
        debug!(url = %self.base_url, category = request.category.as_str(), "POST task");

        let response = self.client.post(&self.base_url).json(request).send().await?;
        debug!(status = %response.status(), "create response");
        Self::read(response).await
    }

    async fn update(&self, id: i64, request: &UpdateTodoRequest) -> ApiResult<Todo> {
        let url = self.item_url(id);
        debug!(%url, "PATCH task");

        let response = self.client.patch(&url).json(request).send().await?;
        debug!(status = %response.status(), id, "update response");
        Self::read(response).await
    }

    async fn toggle_completion(&self, id: i64) -> ApiResult<Todo> {
        let url = format!("{}/{}", self.item_url(id), TOGGLE_SUFFIX);
        debug!(%url, "PATCH task completion");

        let response = self.client.patch(&url).send().await?;
        debug!(status = %response.status(), id, "toggle response");
        Self::read(response).await
    }

    async fn delete_by_id(&self, id: i64) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!(%url, "DELETE task");

        let response = self.client.delete(&url).send().await?;
        debug!(status = %response.status(), id, "delete response");
        response.error_for_status()?;
        Ok(())
    }
}
