use thiserror::Error;

use crate::domain::events::ReplyFailure;

#[derive(Debug, Error)]
pub enum QueryClientError {
    #[error("failed to build http client: {0}")]
    Build(String),
    #[error("query request failed: {0}")]
    Transport(String),
    #[error("query request timed out")]
    Timeout,
    #[error("query endpoint responded with status {0}")]
    Status(u16),
    #[error("query response body is invalid: {0}")]
    InvalidBody(String),
}

impl QueryClientError {
    /// Collapses the error into the cause attached to a reply event.
    pub fn failure(&self) -> ReplyFailure {
        match self {
            Self::Build(_) | Self::Transport(_) => ReplyFailure::Transport,
            Self::Timeout => ReplyFailure::Timeout,
            Self::Status(status) => ReplyFailure::Status(*status),
            Self::InvalidBody(_) => ReplyFailure::InvalidBody,
        }
    }
}

impl From<reqwest::Error> for QueryClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::InvalidBody(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QueryClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}
