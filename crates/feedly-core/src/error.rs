use thiserror::Error;

use crate::request::RawResponse;

/// Errors produced while building, executing or classifying API calls.
///
/// Validation failures (`InvalidParameter`, `ExpiredToken`, `InvalidCsrf`)
/// are raised before any network I/O; the status variants wrap the offending
/// response so callers can still read its body.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("OAuth required: access_token has expired")]
    ExpiredToken,
    #[error("invalid csrf state: expected `{expected}`, received `{received}`")]
    InvalidCsrf { expected: String, received: String },
    #[error("unauthorized")]
    Unauthorized(RawResponse),
    #[error("forbidden")]
    Forbidden(RawResponse),
    #[error("rate limit reached")]
    RateLimit(RawResponse),
    #[error("api responded with status {}", .0.status)]
    Response(RawResponse),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn missing_parameter(name: &str) -> Self {
        Error::InvalidParameter(format!("missing required parameter `{name}`"))
    }

    /// The raw response wrapped by a server-classified error, if any.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Unauthorized(response)
            | Error::Forbidden(response)
            | Error::RateLimit(response)
            | Error::Response(response) => Some(response),
            _ => None,
        }
    }
}
