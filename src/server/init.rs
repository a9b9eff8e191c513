/**
 * Server Initialization
 *
 * Connects to the store, builds the application state, and assembles the
 * router with its middleware stack (CORS, request tracing).
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Attempt the database connection and run migrations
 * 3. Construct `AppState` and the router
 *
 * A failed database connection is logged but does not prevent the HTTP
 * listener from starting; persistence routes then fail individually until
 * the process is restarted.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create the Axum application from the environment
///
/// Returns the router together with the loaded configuration so the caller
/// can bind the configured port.
pub async fn create_app() -> (Router, Arc<Config>) {
    tracing::info!("Initializing cuisine backend server");

    let config = Config::load();
    let pool = connect_database(&config).await;

    let state = AppState::new(pool, config);
    let config = state.config.clone();

    (build_app(state), config)
}

/// Assemble the router and middleware for a given state
///
/// Split out from [`create_app`] so tests can drive the full router with a
/// state of their own making.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Attempt the store connection and run migrations
///
/// Returns `None` when no credentials are configured or the connection
/// fails; both cases are logged and the server starts without a store.
async fn connect_database(config: &Config) -> Option<PgPool> {
    let url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("No database credentials configured; store routes will fail");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Starting without a store; persistence routes will fail");
            return None;
        }
    };

    tracing::info!("Database connection pool created");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already be applied by an earlier deployment.
            tracing::warn!("Failed to run database migrations: {:?}", e);
        }
    }

    Some(pool)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring unparseable CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}
