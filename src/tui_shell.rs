//! Terminal front end: one screen per [`crate::model::Route`].
//!
//! Page fetches for the feed run on worker threads; their results come back
//! over a channel and are applied to the feed loader on the UI thread.

use anyhow::Result;

use crate::config::ClientConfig;

mod app;
mod commands;
mod input;
mod worker;

pub(crate) fn run(config: ClientConfig) -> Result<()> {
    app::run(config)
}
