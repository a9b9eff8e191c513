//! Purchases Module
//!
//! Purchase records and the transactional stock update: recording a
//! purchase inserts the record and adjusts the food item's counters inside
//! one database transaction.
//!
//! ```text
//! purchases/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Record types and database operations
//! └── handlers.rs  - HTTP handlers
//! ```

/// Record types and database operations
pub mod db;

/// HTTP handlers for purchase endpoints
pub mod handlers;

pub use db::{NewPurchase, PurchaseRecord};
