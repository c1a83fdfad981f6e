use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {status}")]
    RequestFailed { status: StatusCode },

    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    #[error("Element #{0} not found")]
    MissingElement(String),

    #[error("Unrecognised follow button label: {0:?}")]
    UnknownFollowLabel(String),

    #[error("No user id in page location {0:?}")]
    MissingUserId(String),
}

impl ClientError {
    /// Text shown to the user when a failure is surfaced as an alert.
    /// Mirrors a response's `statusText`: the canonical reason phrase.
    pub fn status_text(&self) -> String {
        match self {
            ClientError::RequestFailed { status } => status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string()),
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
