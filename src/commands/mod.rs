//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function. Commands talking to the API build a [`TodoStore`] with
//! [`connect`] and report the store's error slot through [`finish`].

pub mod add;
pub mod app;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod toggle;

use crate::api::{TodoApi, TodoClient};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Configure the task API location")]
    Init(init::InitArgs),
    #[command(about = "List tasks, optionally filtered by category")]
    List(list::ListArgs),
    #[command(about = "Show one task")]
    Show(show::ShowArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Toggle the completion of a task")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Change the description of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Interactive session")]
    App,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::App => app::cmd().await,
        }
    }
}

/// Store backed by the HTTP client for the configured API.
pub fn connect() -> Result<TodoStore<TodoClient>> {
    let api = Config::read()?.api_config();
    msg_debug!(Message::ApiUrlInUse(api.base_url.clone()));
    Ok(TodoStore::new(TodoClient::new(&api)?))
}

/// Turns a failed store operation into a command error carrying the
/// store's user-facing message.
pub fn finish<A: TodoApi>(store: &TodoStore<A>, succeeded: bool) -> Result<()> {
    if succeeded {
        return Ok(());
    }
    match store.error() {
        Some(message) => msg_bail_anyhow!(message),
        None => msg_bail_anyhow!(Message::OperationCancelled),
    }
}
