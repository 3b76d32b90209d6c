use super::{connect, finish};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let mut store = connect()?;
    let Some(todo) = store.toggle(args.id).await else {
        return finish(&store, false);
    };

    if todo.completed {
        msg_success!(Message::TodoCompleted(todo.id));
    } else {
        msg_success!(Message::TodoReopened(todo.id));
    }
    Ok(())
}
