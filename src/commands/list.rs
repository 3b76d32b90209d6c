use super::{connect, finish};
use crate::libs::todo::Category;
use crate::libs::view::{AppView, CategoryFilter};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks of this category (repeatable)
    #[arg(short, long = "category", value_enum)]
    pub categories: Vec<Category>,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let mut store = connect()?;
    let mut filter = CategoryFilter::default();
    let intent = filter.select(args.categories);

    let succeeded = store.dispatch(intent).await;
    finish(&store, succeeded)?;

    msg_print!(AppView::new().render(store.state()));
    Ok(())
}
