//! HTTP transport for the festival backend.
//!
//! Every request is built through [`ApiClient`], which attaches the bearer
//! credential when one is held and routes any 401 through
//! [`Credentials::on_unauthorized`] before returning
//! [`ApiError::Unauthorized`].

use std::sync::Arc;

use crate::config::{ClientConfig, REQUEST_TIMEOUT};

mod error;
pub use self::error::ApiError;

mod http_client;
mod member;
mod subscriptions;
mod tours;

/// Source of the bearer credential and sink for credential rejection.
pub trait Credentials: Send + Sync {
    fn bearer(&self) -> Option<String>;

    /// Called once per response with status 401, from any endpoint.
    fn on_unauthorized(&self);
}

/// Credentials for callers that never authenticate.
pub struct Anonymous;

impl Credentials for Anonymous {
    fn bearer(&self) -> Option<String> {
        None
    }

    fn on_unauthorized(&self) {}
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Arc<dyn Credentials>,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, credentials: Arc<dyn Credentials>) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("pickdong")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            base_url: config.api_base_url.clone(),
            credentials,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
