//! Classification of HTTP failures into user-facing errors.

use reqwest::StatusCode;

/// Errors reported with a specific explanation instead of a bare status code.
///
/// Requests are unauthenticated, so the rate-limit case in particular comes
/// up in practice and deserves a message that says what happened.
#[derive(Debug)]
pub enum ApiError {
    /// Rate limit exceeded (HTTP 403 or 429)
    RateLimitExceeded(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Other client errors (4xx)
    ClientError(String),
    /// Server errors (5xx)
    ServerError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RateLimitExceeded(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Requests are unauthenticated; try again later.",
                    msg
                )
            }
            ApiError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            ApiError::ClientError(msg) => {
                write!(f, "Request error: {}", msg)
            }
            ApiError::ServerError(msg) => {
                write!(f, "Server error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Classifies a status error into an [`ApiError`].
/// Returns Ok(()) for errors without an HTTP status (connection failures).
pub fn classify_error(error: &reqwest::Error) -> Result<(), ApiError> {
    if let Some(status) = error.status() {
        match status {
            // A status error never carries the response body, so the rate
            // limit cannot be told apart from other 403 causes here. For
            // unauthenticated GitHub calls a 403 is almost always the rate
            // limiter, so report it as such.
            StatusCode::FORBIDDEN => {
                return Err(ApiError::RateLimitExceeded(
                    "GitHub API returned 403 Forbidden".to_string(),
                ));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(ApiError::RateLimitExceeded(
                    "Too many requests".to_string(),
                ));
            }
            StatusCode::NOT_FOUND => {
                return Err(ApiError::NotFound(
                    "The requested resource was not found".to_string(),
                ));
            }
            s if s.is_client_error() => {
                return Err(ApiError::ClientError(format!("HTTP {} error", s.as_u16())));
            }
            s if s.is_server_error() => {
                return Err(ApiError::ServerError(format!("HTTP {} error", s.as_u16())));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Maps an error from `error_for_status()` to a user-friendly [`ApiError`]
/// where one applies, passing other errors through unchanged.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    match classify_error(&error) {
        Ok(()) => anyhow::Error::from(error),
        Err(api_error) => anyhow::Error::from(api_error),
    }
}
