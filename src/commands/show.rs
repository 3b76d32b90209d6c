use super::{connect, finish};
use crate::libs::view::TodoList;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let mut store = connect()?;
    let todo = store.load_one(args.id).await;
    finish(&store, todo.is_some())?;

    if let Some(todo) = todo {
        let mut list = TodoList::new();
        list.sync(std::slice::from_ref(&todo));
        msg_print!(list.render());
    }
    Ok(())
}
