/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each variant
 * maps to one HTTP status code; the mapping lives in `status_code()` so the
 * response conversion and the tests share a single source of truth.
 */

use axum::http::StatusCode;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Errors surfaced by the HTTP API
///
/// Driver and token errors convert via `#[from]`, so handlers can use `?`
/// on `sqlx` and `jsonwebtoken` results directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session cookie, or the token failed verification
    #[error("authentication required")]
    Unauthorized,

    /// Authenticated email does not match the resource being accessed
    #[error("access denied")]
    Forbidden,

    /// The requested document does not exist
    #[error("not found")]
    NotFound,

    /// Malformed request input, rejected before any store call
    #[error("{0}")]
    BadRequest(String),

    /// The store was not reachable at startup; every persistence route
    /// degrades uniformly until the process is restarted
    #[error("store is not available")]
    Unavailable,

    /// Any driver-level failure: network, constraint violation, bad rows
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token signing or verification failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a bad-request error with a message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// Token errors split by kind: verification failures (bad signature,
    /// expiry, malformed token) are the caller's fault and map to 401,
    /// anything else is a server-side signing problem and maps to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(err) => match err.kind() {
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::ExpiredSignature
                | ErrorKind::ImmatureSignature => StatusCode::UNAUTHORIZED,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::bad_request("bad id").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, Debug)]
        struct Claims {
            exp: u64,
        }

        let key = EncodingKey::from_secret(b"test-secret");
        let token = encode(&Header::default(), &Claims { exp: 1 }, &key).unwrap();
        let err = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap_err();

        assert_eq!(ApiError::Token(err).status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bad_request_message() {
        let err = ApiError::bad_request("quantity must be positive");
        assert_eq!(err.to_string(), "quantity must be positive");
    }
}
