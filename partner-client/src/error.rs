//! Errors surfaced by the partner API client.

use thiserror::Error;

/// Failure modes of a partner API call.
///
/// Transport failures come from [`reqwest`]; the 4xx variants mirror the
/// status codes the booking server actually returns.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 2xx but the body was missing expected fields.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401: no token, or the token expired.
    #[error("Authentication required")]
    Unauthorized,

    /// 403: the token belongs to a different partner vertical.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404: unknown dish or booking id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400: the server rejected the payload.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The response body was not valid JSON for the expected type.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::LoginReply;

    #[test]
    fn test_malformed_body_maps_to_serialization_error() {
        let err = serde_json::from_str::<LoginReply>("{not json").unwrap_err();
        let client_err: ClientError = err.into();
        assert!(matches!(client_err, ClientError::Serialization(_)));
    }
}
