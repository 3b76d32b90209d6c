//! # todo-cli - Terminal client for a remote task list
//!
//! Manages a personal task list served by a REST API: create, list, edit,
//! toggle completion, filter by category and delete tasks.
//!
//! ## Layers
//!
//! - **API client** ([`api`]): HTTP calls against the task collection resource
//! - **State manager** ([`libs::store`]): owns the in-memory list, loading and
//!   error flags, active filters; reconciles local state with remote results
//! - **Presentation** ([`libs::view`]): form, rows, list and filter components
//!   that emit intents and render read-only views of the state
//! - **Commands** ([`commands`]): one-shot subcommands and the interactive session
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_cli::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
