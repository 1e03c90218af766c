use reqwest::StatusCode;
use thiserror::Error;

/// Errors from calls against the posts API.
///
/// Transport failures (connection refused, DNS, timeout) and non-success
/// HTTP statuses both end up here; the lifecycle runner only ever needs
/// their display text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request payload: {0}")]
    Json(#[from] serde_json::Error),
}
