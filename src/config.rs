use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::write_atomic;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pickdong.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_URL_ENV: &str = "PICKDONG_API_BASE_URL";
pub const HOME_ENV: &str = "PICKDONG_HOME";

const CONFIG_FILE: &str = "config.json";

/// On-disk settings in `<data_dir>/config.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Resolve settings: explicit values win, then `config.json`, then defaults.
    ///
    /// Environment variables are folded into the explicit values by the CLI
    /// parser, so callers pass `None` when neither flag nor env is set.
    pub fn resolve(api_url: Option<String>, data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(d) => d,
            None => default_data_dir()?,
        };
        let file = read_config(&data_dir)?;
        let api_base_url = api_url
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url),
            data_dir,
        })
    }

    pub fn for_dir(api_base_url: &str, data_dir: &Path) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("pickdong.log")
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("resolve user config directory")?;
    Ok(base.join("pickdong"))
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn read_config(data_dir: &Path) -> Result<ConfigFile> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ConfigFile {
            version: 1,
            api_base_url: None,
        });
    }
    let bytes = fs::read(&path).context("read config.json")?;
    let cfg: ConfigFile = serde_json::from_slice(&bytes).context("parse config.json")?;
    if cfg.version != 1 {
        anyhow::bail!("unsupported config version {}", cfg.version);
    }
    Ok(cfg)
}

pub fn write_config(data_dir: &Path, cfg: &ConfigFile) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
    write_atomic(&data_dir.join(CONFIG_FILE), &bytes).context("write config.json")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
