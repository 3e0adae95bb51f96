use clap::Args;

use pickdong::model::TourId;

#[derive(Args)]
pub(crate) struct SubscriptionsArgs {
    /// Show every region with its subscription flag
    #[arg(long)]
    pub(crate) all: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct RegionArgs {
    /// Parent region name (e.g. 서울)
    pub(crate) region: String,
    /// Sub-region name (e.g. 용산구)
    pub(crate) sub_region: String,
}

#[derive(Args)]
pub(crate) struct FeedArgs {
    /// Number of pages to load
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) pages: u32,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct EventArgs {
    pub(crate) id: TourId,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
