use clap::Subcommand;

pub(crate) mod account;
pub(crate) mod browse;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the Google sign-in URL
    Login,

    /// Finish sign-in with the URL the browser was redirected to
    Callback(account::CallbackArgs),

    /// Forget the stored credential and identity
    Logout,

    /// Show the signed-in member
    Whoami(account::WhoamiArgs),

    /// Delete the member account and log out
    #[command(name = "delete-account")]
    DeleteAccount(account::DeleteAccountArgs),

    /// Show or change email notifications
    Notify(account::NotifyArgs),

    /// Show subscribed regions (or every region with --all)
    Subscriptions(browse::SubscriptionsArgs),

    /// Subscribe to a sub-region
    Subscribe(browse::RegionArgs),

    /// Unsubscribe from a sub-region
    Unsubscribe(browse::RegionArgs),

    /// List events in subscribed regions
    Feed(browse::FeedArgs),

    /// Show one event
    Event(browse::EventArgs),

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the resolved configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Persist the backend base URL in config.json
    SetUrl { url: String },
}
