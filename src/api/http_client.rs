use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiClient, ApiError};

impl ApiClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.credentials.bearer() {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    pub(super) fn send(&self, req: RequestBuilder, label: &str) -> Result<Response, ApiError> {
        let resp = self
            .authorize(req)
            .send()
            .map_err(|e| ApiError::transport(label, e))?;
        self.ensure_ok(resp, label)
    }

    pub(super) fn ensure_ok(&self, resp: Response, label: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(request = label, "credential rejected by backend; forcing logout");
            self.credentials.on_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                label: label.to_string(),
                status,
            });
        }
        Ok(resp)
    }

    pub(super) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.client.get(self.url(path)), label)?;
        resp.json().map_err(|e| ApiError::decode(label, e))
    }
}
