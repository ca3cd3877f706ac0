use crate::{
    libs::{messages::Message, secret::Secret},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Forget the stored API key
    #[arg(short, long)]
    remove: bool,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let secret = Secret::api_key();
    if args.remove {
        secret.delete()?;
        msg_success!(Message::ApiKeyRemoved);
        return Ok(());
    }

    secret.prompt()?;
    msg_success!(Message::ApiKeySaved);
    Ok(())
}
