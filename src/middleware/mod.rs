//! Middleware Module
//!
//! Request middleware for the backend server.
//!
//! - **`auth`** - session verification for protected routes
//!
//! Protected routes are wrapped with
//! `axum::middleware::from_fn_with_state(state, require_session)`; handlers
//! then receive the decoded identity through the [`auth::CurrentUser`]
//! extractor.

pub mod auth;

pub use auth::{require_session, CurrentUser};
