//! Errors produced by the remote posts client.

use thiserror::Error;

/// Failure of a single remote call.
///
/// Holds rendered messages rather than the transport error so it can be
/// stored in application state and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("Invalid response: {message}")]
    Decode { message: String },

    /// The request could not be built (bad base URL or id).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Short label for status lines.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Http { .. } => "http_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// HTTP status when the server rejected the call.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode {
                message: err.to_string(),
            }
        } else {
            ApiError::Network {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = ApiError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.error_type(), "http_error");
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn network_error_has_no_status() {
        let err = ApiError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.error_type(), "network_error");
    }
}
