use super::{connect, finish};
use crate::libs::messages::Message;
use crate::libs::todo::Category;
use crate::libs::view::form::{TodoForm, MAX_DESCRIPTION_LEN};
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    description: String,
    /// Task category
    #[arg(short, long, value_enum, default_value_t = Category::default())]
    category: Category,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut form = TodoForm::new();
    if form.set_description(&args.description) {
        msg_warning!(Message::DescriptionTruncated(MAX_DESCRIPTION_LEN));
    }
    form.set_category(args.category);

    let Some(intent) = form.submit() else {
        msg_bail_anyhow!(Message::DescriptionRequired);
    };

    let mut store = connect()?;
    let succeeded = store.dispatch(intent).await;
    finish(&store, succeeded)?;

    if let Some(todo) = store.todos().last() {
        msg_success!(Message::TodoCreated(todo.id));
    }
    form.reset();
    Ok(())
}
