use clap::{Args, ValueEnum};

#[derive(Args)]
pub(crate) struct CallbackArgs {
    /// Redirect URL (or query string) carrying `token=...`
    pub(crate) url: String,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DeleteAccountArgs {
    /// Confirm deletion
    #[arg(long)]
    pub(crate) yes: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Toggle {
    On,
    Off,
}

#[derive(Args)]
pub(crate) struct NotifyArgs {
    /// New state; omit to show the current one
    #[arg(value_enum)]
    pub(crate) state: Option<Toggle>,
}
