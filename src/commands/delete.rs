use super::{connect, finish};
use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = connect()?;
    let succeeded = store.dispatch(Intent::Delete(args.id)).await;
    finish(&store, succeeded)?;

    msg_success!(Message::TodoDeleted(args.id));
    Ok(())
}
