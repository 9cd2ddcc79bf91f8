use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::{DELETE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};

/// Why a call to the report service did not succeed. Only ever logged; the
/// operator sees the generic text from [`RemoteOperation::failure_message`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server rejected the request: {0}")]
    Rejected(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    InvalidRequest(String),
}

impl From<crux_http::Error> for RemoteError {
    fn from(err: crux_http::Error) -> Self {
        match err {
            crux_http::Error::Io(msg) => Self::Network(msg),
            crux_http::Error::Timeout => Self::Timeout,
            crux_http::Error::Json(msg) => Self::Decode(msg),
            crux_http::Error::Url(msg) => Self::InvalidRequest(msg),
            // non-2xx responses
            other => Self::Rejected(other.to_string()),
        }
    }
}

impl From<ConfigError> for RemoteError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteOperation {
    FetchReports,
    UpdateStatus,
    DeleteReport,
}

impl RemoteOperation {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FetchReports => "fetch_reports",
            Self::UpdateStatus => "update_status",
            Self::DeleteReport => "delete_report",
        }
    }

    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::FetchReports => FETCH_FAILED_MESSAGE,
            Self::UpdateStatus => UPDATE_FAILED_MESSAGE,
            Self::DeleteReport => DELETE_FAILED_MESSAGE,
        }
    }
}
