//! Reviews Module
//!
//! Read-only listing of customer reviews; rows are seeded out of band and
//! this surface defines no write path.

pub mod db;
pub mod handlers;

pub use db::Review;
