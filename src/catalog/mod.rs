//! Catalog Module
//!
//! The food catalog: listing with search and popularity sort, single-item
//! lookup, creation, owner queries, and the field-merge upsert.
//!
//! ```text
//! catalog/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Record types and database operations
//! └── handlers.rs  - HTTP handlers
//! ```

/// Record types and database operations
pub mod db;

/// HTTP handlers for catalog endpoints
pub mod handlers;

pub use db::{FoodItem, FoodPatch, MadeBy, NewFood};
