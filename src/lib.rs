//! Cuisine Server - Main Library
//!
//! Backend for the Muhammad Cuisine restaurant ordering web application.
//! It exposes a JSON HTTP API to list and search the food catalog, record
//! purchases, manage a user-submitted image gallery, and handle session
//! authentication via signed tokens stored in cookies.
//!
//! # Overview
//!
//! The server is a thin API-and-persistence glue layer: every operation
//! validates its input, issues one or two PostgreSQL calls through the shared
//! pool, and returns the result as JSON. There is no queueing, retrying, or
//! caching; requests are independent asynchronous tasks.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs          - Module exports and documentation
//! ├── main.rs         - Process entry point
//! ├── server/         - Configuration, application state, app assembly
//! ├── routes/         - Route configuration
//! ├── auth/           - Session tokens, cookies, auth endpoints
//! ├── middleware/     - Session-verification middleware
//! ├── catalog/        - Food catalog
//! ├── purchases/      - Purchase records
//! ├── gallery/        - Gallery entries
//! ├── reviews/        - Reviews (read-only)
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! All handlers receive a [`server::state::AppState`] constructed once at
//! startup: the PostgreSQL connection pool (shared, driver-managed) and the
//! loaded configuration. If the store is unreachable at startup the listener
//! still comes up and persistence routes fail individually.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod middleware;
pub mod purchases;
pub mod reviews;
pub mod routes;
pub mod server;
