use pickdong::model::Route;
use pickdong::oauth;
use pickdong::subscriptions::EmailNotifications;

use crate::cli_commands::account::Toggle;

use super::*;

pub(super) fn handle_login_command() -> Result<()> {
    println!("Open this URL in a browser to sign in with Google:");
    println!("{}", oauth::authorization_url());
    println!();
    println!("Then run `pickdong callback <URL>` with the address you were redirected to.");
    Ok(())
}

pub(super) fn handle_callback_command(client: &Client, url: &str) -> Result<()> {
    match client.session.complete_external_login(&client.api, url) {
        route @ Route::MyPage => {
            let email = client.session.user().map(|u| u.email).unwrap_or_default();
            println!("Logged in as {}", email);
            println!("landing: {}", route.path());
            Ok(())
        }
        route => anyhow::bail!("login failed; back to {}", route.path()),
    }
}

pub(super) fn handle_logout_command(client: &Client) -> Result<()> {
    client.session.logout();
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(client: &Client, json: bool) -> Result<()> {
    let email = require_member(client)?;
    let mut notify = EmailNotifications::default();
    notify.hydrate(&client.api);

    if json {
        print_json(
            &serde_json::json!({
                "email": email,
                "email_notifications": notify.enabled(),
            }),
            "whoami",
        )?;
    } else {
        println!("email: {}", email);
        println!(
            "email_notifications: {}",
            if notify.enabled() { "on" } else { "off" }
        );
    }
    Ok(())
}

pub(super) fn handle_delete_account_command(client: &Client, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete the account without --yes");
    }
    require_member(client)?;
    client
        .session
        .delete_account(&client.api)
        .context("delete account")?;
    println!("Account deleted");
    Ok(())
}

pub(super) fn handle_notify_command(client: &Client, state: Option<Toggle>) -> Result<()> {
    require_member(client)?;
    let mut notify = EmailNotifications::default();
    notify.hydrate(&client.api);

    if let Some(state) = state {
        notify
            .set(&client.api, state == Toggle::On)
            .context("update email notifications")?;
    }
    println!(
        "email notifications: {}",
        if notify.enabled() { "on" } else { "off" }
    );
    Ok(())
}
