use anyhow::Result;

use crate::config::ClientConfig;

/// Run the interactive client until the user quits.
pub fn run(config: ClientConfig) -> Result<()> {
    crate::tui_shell::run(config)
}
