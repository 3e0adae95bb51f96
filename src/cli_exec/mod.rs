use anyhow::{Context, Result};

use pickdong::client::Client;
use pickdong::config::ClientConfig;

use crate::{Commands, ConfigCommands};

mod account;
mod browse;
mod client;
mod dispatch;
mod settings;

pub(super) fn handle_command(config: &ClientConfig, command: Commands) -> Result<()> {
    dispatch::handle_command(config, command)
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}

/// Bootstrap the session and fail unless a member is signed in.
fn require_member(client: &Client) -> Result<String> {
    let session = client.session.bootstrap(&client.api);
    session
        .user
        .map(|u| u.email)
        .context("not logged in (run `pickdong login`)")
}
