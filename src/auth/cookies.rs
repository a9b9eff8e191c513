/**
 * Session Cookie Construction
 *
 * Builds the `token` cookie that carries the session JWT, and its clearing
 * counterpart. Attributes follow the deployment environment: production
 * serves the frontend from another origin, so the cookie must be `Secure`
 * with `SameSite=None`; development stays on `SameSite=Lax` over plain HTTP.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::server::config::Config;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Cookie lifetime, matching the token expiry
const COOKIE_MAX_AGE: Duration = Duration::days(60);

/// Build the session cookie carrying a signed token
pub fn session_cookie(token: String, config: &Config) -> Cookie<'static> {
    let builder = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .max_age(COOKIE_MAX_AGE);

    let builder = if config.production {
        builder.secure(true).same_site(SameSite::None)
    } else {
        builder.same_site(SameSite::Lax)
    };

    builder.build()
}

/// Build the clearing cookie issued on logout
///
/// Attributes must match the session cookie for browsers to drop it; the
/// value is emptied and the max-age zeroed. This only removes the cookie
/// client-side; an already-captured token stays valid until expiry.
pub fn clear_session_cookie(config: &Config) -> Cookie<'static> {
    let builder = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .path("/")
        .max_age(Duration::ZERO);

    let builder = if config.production {
        builder.secure(true).same_site(SameSite::None)
    } else {
        builder.same_site(SameSite::Lax)
    };

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(production: bool) -> Config {
        Config {
            port: 3000,
            database_url: None,
            jwt_secret: "test-secret".to_string(),
            production,
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_development_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), &config(false));

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), None);
        assert_eq!(cookie.max_age(), Some(Duration::days(60)));
    }

    #[test]
    fn test_production_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), &config(true));

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_clear_cookie_zeroes_the_session() {
        let cookie = clear_session_cookie(&config(false));

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
