//! Construction and transport errors.

use thiserror::Error;

/// Errors raised while building or sending a request.
///
/// API operations never return this type; they fold it into
/// [`crate::Lookup::Unavailable`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Request path is empty or does not start with `/`.
    #[error("invalid request path '{0}'")]
    InvalidPath(String),

    /// HTTP method is not one of `GET`, `POST`, `PUT`, `DELETE`.
    #[error("unsupported HTTP method '{0}'")]
    InvalidMethod(String),

    /// Raw header is not of the form `Name: value`.
    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
