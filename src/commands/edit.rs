use super::{connect, finish};
use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::todo::Todo;
use crate::libs::view::{EditKey, TodoItem};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,
    /// New description
    #[arg(required = true)]
    description: String,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let mut store = connect()?;
    let Some(todo) = store.load_one(args.id).await else {
        return finish(&store, false);
    };

    let Some(intent) = edit_intent(todo, &args.description) else {
        msg_bail_anyhow!(Message::DescriptionRequired);
    };

    let succeeded = store.dispatch(intent).await;
    finish(&store, succeeded)?;

    msg_success!(Message::TodoUpdated(args.id));
    Ok(())
}

/// Runs the row editor over `todo` with `text` and presses Enter.
///
/// `None` when the text is blank.
pub fn edit_intent(todo: Todo, text: &str) -> Option<Intent> {
    let mut item = TodoItem::new(todo);
    item.begin_edit();
    item.input(text);
    item.handle_key(EditKey::Enter)
}
