//! Server Module
//!
//! Configuration loading, application state, and assembly of the Axum app.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Environment-driven configuration
//! ├── state.rs   - AppState and FromRef impls
//! └── init.rs    - Database connection and app assembly
//! ```

/// Environment-driven configuration
pub mod config;

/// Database connection and app assembly
pub mod init;

/// Application state
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
