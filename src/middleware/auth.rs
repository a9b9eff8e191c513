/**
 * Authentication Middleware
 *
 * Protects routes that require a valid session. The middleware:
 *
 * 1. Reads the `token` cookie from the request
 * 2. Verifies the signature and expiry
 * 3. Attaches the decoded identity to the request extensions
 *
 * Returns 401 Unauthorized when the cookie is missing or verification
 * fails. Authorization (matching the authenticated email against the
 * resource being accessed) is layered on top of this inside the handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::SESSION_COOKIE;
use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity decoded from the session token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub email: String,
}

/// Session-verification middleware
///
/// Applied per protected route with `from_fn_with_state`. On success the
/// request proceeds with [`CurrentUser`] available in its extensions.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(request.headers());

    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .ok_or_else(|| {
            tracing::warn!("Missing session cookie");
            ApiError::Unauthorized
        })?;

    let claims = verify_token(&token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Session token rejected: {:?}", e);
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(CurrentUser {
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated identity
///
/// Only usable behind [`require_session`]; a route that forgot the
/// middleware fails with 401 rather than exposing data.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extractor_reads_extensions() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .extension(CurrentUser {
                email: "test@example.com".to_string(),
            })
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let user = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_extractor_missing_identity() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
