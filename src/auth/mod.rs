//! Authentication Module
//!
//! Session management for the ordering API: issuing a signed, time-limited
//! token on login, carrying it in an HTTP-only cookie, and clearing it on
//! logout.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── sessions.rs  - JWT claims, token creation and verification
//! ├── cookies.rs   - `token` cookie construction and clearing
//! └── handlers.rs  - POST /jwt and GET /logOut handlers
//! ```
//!
//! # Session Flow
//!
//! 1. **Login**: `POST /jwt` with a claim set (at minimum an email) → token
//!    signed with the server secret, 60-day expiry, set as an HTTP-only
//!    cookie
//! 2. **Protected request**: the middleware verifies the cookie and attaches
//!    the decoded email to the request
//! 3. **Logout**: `GET /logOut` clears the cookie client-side
//!
//! # Limitation
//!
//! Tokens are not persisted or blacklisted server-side. Logout only removes
//! the cookie; a token captured before logout remains valid until its
//! natural expiry.

/// JWT token generation and validation
pub mod sessions;

/// Session cookie construction
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used items
pub use cookies::{clear_session_cookie, session_cookie, SESSION_COOKIE};
pub use handlers::{issue_token, log_out};
pub use sessions::{create_token, verify_token, Claims};
