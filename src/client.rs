use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::session::SessionManager;
use crate::store::FileSessionStore;

/// Session and transport wired together for one data directory.
#[derive(Clone)]
pub struct Client {
    pub config: ClientConfig,
    pub session: SessionManager,
    pub api: ApiClient,
}

impl Client {
    pub fn open(config: ClientConfig) -> Result<Self> {
        let session = SessionManager::open(FileSessionStore::open(&config.data_dir));
        let api = ApiClient::new(&config, session.credentials()).context("build api client")?;
        Ok(Self {
            config,
            session,
            api,
        })
    }
}
