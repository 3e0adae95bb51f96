use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pickdong::config::{API_URL_ENV, ClientConfig, HOME_ENV};

use crate::Commands;

const DEFAULT_LOG_FILTER: &str = "pickdong=warn";

#[derive(Parser)]
#[command(name = "pickdong")]
#[command(about = "Regional festival subscriptions", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL
    #[arg(long = "api-url", value_name = "URL", env = API_URL_ENV, global = true)]
    api_url: Option<String>,

    /// Directory holding session.json, config.json and the TUI log
    #[arg(long = "data-dir", value_name = "PATH", env = HOME_ENV, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ClientConfig::resolve(cli.api_url, cli.data_dir)?;

    match cli.command {
        None => {
            init_file_logging(&config)?;
            pickdong::tui::run(config)?;
        }
        Some(command) => {
            init_stderr_logging();
            crate::cli_exec::handle_command(&config, command)?
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so its logs go to `<data_dir>/pickdong.log`.
fn init_file_logging(config: &ClientConfig) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir).context("create data directory")?;
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
