use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized (credential invalid or expired; run `pickdong login`)")]
    Unauthorized,

    #[error("{label}: request timed out")]
    Timeout { label: String },

    #[error("{label}: request failed")]
    Transport {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: unexpected status {status}")]
    Status { label: String, status: StatusCode },

    #[error("{label}: invalid response body")]
    Decode {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("build http client")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub(super) fn transport(label: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return ApiError::Timeout {
                label: label.to_string(),
            };
        }
        ApiError::Transport {
            label: label.to_string(),
            source,
        }
    }

    pub(super) fn decode(label: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return ApiError::Timeout {
                label: label.to_string(),
            };
        }
        ApiError::Decode {
            label: label.to_string(),
            source,
        }
    }
}
