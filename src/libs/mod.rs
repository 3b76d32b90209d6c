//! Core library modules for the todo client.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Domain Model**: Task records, categories and request bodies
//! - **State Management**: The list store with its subscribe/notify contract
//! - **User Interface**: Form, row, list and filter components
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_cli::api::todo::TodoClient;
//! use todo_cli::libs::config::Config;
//! use todo_cli::libs::store::TodoStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = TodoClient::new(&Config::read()?.api_config())?;
//! let mut store = TodoStore::new(client);
//! store.refresh().await;
//! println!("{} of {} done", store.completed_count(), store.total_count());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod store;
pub mod todo;
pub mod view;
