//! Error Module
//!
//! Defines the API error taxonomy used by every HTTP handler and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `Unauthorized` (401) - missing, invalid, or expired session token
//! - `Forbidden` (403) - authenticated identity does not match the resource
//! - `NotFound` (404) - requested document does not exist
//! - `BadRequest` (400) - malformed identifier or quantity, rejected before
//!   any driver call
//! - `Unavailable` (503) - the store was unreachable at startup
//! - `Database` (500) - any driver-level failure
//! - `Token` (401/500) - token verification vs. signing failures

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
