/**
 * Authentication Handlers
 *
 * HTTP handlers for issuing and clearing the session cookie.
 *
 * # Routes
 *
 * - `POST /jwt` - sign a 60-day token for the supplied claim set and set it
 *   as an HTTP-only cookie
 * - `GET /logOut` - clear the cookie (client-side only; the token itself is
 *   not revoked)
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::cookies::{clear_session_cookie, session_cookie};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::server::config::Config;

/// Claim set supplied on login; must carry an email
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenRequest {
    /// Identity claim embedded in the session token
    pub email: String,
}

/// Acknowledgement returned by both auth endpoints
#[derive(Debug, Serialize)]
pub struct AuthAck {
    pub success: bool,
}

/// Issue a session token
///
/// Signs the claim set with the server secret and sets the result as the
/// `token` cookie. The only error path is a signing failure, which fails
/// the request with 500.
pub async fn issue_token(
    State(config): State<Arc<Config>>,
    jar: CookieJar,
    Json(request): Json<TokenRequest>,
) -> Result<(CookieJar, Json<AuthAck>), ApiError> {
    let token = create_token(&request.email, &config.jwt_secret)?;

    tracing::info!("Issued session token for {}", request.email);

    let jar = jar.add(session_cookie(token, &config));
    Ok((jar, Json(AuthAck { success: true })))
}

/// Clear the session cookie
///
/// Always succeeds. The cleared cookie carries the same attributes as the
/// session cookie with an empty value and zero max-age.
pub async fn log_out(
    State(config): State<Arc<Config>>,
    jar: CookieJar,
) -> (CookieJar, Json<AuthAck>) {
    tracing::info!("Clearing session cookie");

    let jar = jar.add(clear_session_cookie(&config));
    (jar, Json(AuthAck { success: true }))
}
