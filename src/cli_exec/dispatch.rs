use super::account::{
    handle_callback_command, handle_delete_account_command, handle_login_command,
    handle_logout_command, handle_notify_command, handle_whoami_command,
};
use super::browse::{
    handle_event_command, handle_feed_command, handle_subscribe_command,
    handle_subscriptions_command,
};
use super::client::with_client;
use super::settings::handle_config_command;
use super::*;

pub(super) fn handle_command(config: &ClientConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Login => handle_login_command()?,
        Commands::Callback(args) => {
            with_client(config, |c| handle_callback_command(c, &args.url))?
        }
        Commands::Logout => with_client(config, handle_logout_command)?,
        Commands::Whoami(args) => with_client(config, |c| handle_whoami_command(c, args.json))?,
        Commands::DeleteAccount(args) => {
            with_client(config, |c| handle_delete_account_command(c, args.yes))?
        }
        Commands::Notify(args) => with_client(config, |c| handle_notify_command(c, args.state))?,
        Commands::Subscriptions(args) => {
            with_client(config, |c| handle_subscriptions_command(c, args.all, args.json))?
        }
        Commands::Subscribe(args) => with_client(config, |c| {
            handle_subscribe_command(c, &args.region, &args.sub_region, true)
        })?,
        Commands::Unsubscribe(args) => with_client(config, |c| {
            handle_subscribe_command(c, &args.region, &args.sub_region, false)
        })?,
        Commands::Feed(args) => {
            with_client(config, |c| handle_feed_command(c, args.pages, args.json))?
        }
        Commands::Event(args) => with_client(config, |c| handle_event_command(c, args.id, args.json))?,
        Commands::Config { command } => handle_config_command(config, command)?,
    }

    Ok(())
}
