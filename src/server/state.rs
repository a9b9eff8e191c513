/**
 * Application State Management
 *
 * Defines the state container shared by all handlers and the `FromRef`
 * implementations for Axum state extraction.
 *
 * The state is constructed once at process start and passed explicitly into
 * the router; handlers never reach for globals.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::server::config::Config;

/// Application state injected into every handler
///
/// # Fields
///
/// * `pool` - PostgreSQL connection pool. `None` when the store was
///   unreachable at startup; the listener runs anyway and persistence
///   routes fail individually.
/// * `config` - loaded configuration (port, secret, cookie policy)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// The driver manages its own internal pooling; the application layer
    /// performs no locking or caching on top of it.
    pub pool: Option<PgPool>,

    /// Runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: Option<PgPool>, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Borrow the pool, or fail the request with `503` when the store
    /// never came up
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.pool.as_ref().ok_or(ApiError::Unavailable)
    }
}

/// Allows handlers to extract `State<Option<PgPool>>` directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allows handlers to extract `State<Arc<Config>>` directly
impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            port: 3000,
            database_url: None,
            jwt_secret: "test-secret".to_string(),
            production: false,
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_missing_pool_is_unavailable() {
        let state = AppState::new(None, test_config());
        assert!(matches!(state.pool(), Err(ApiError::Unavailable)));
    }

    #[test]
    fn test_config_from_ref() {
        let state = AppState::new(None, test_config());
        let config = Arc::<Config>::from_ref(&state);
        assert_eq!(config.jwt_secret, "test-secret");
    }
}
