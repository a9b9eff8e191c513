//! Gallery Module
//!
//! User-submitted image gallery: insert and list only; entries are never
//! edited or deleted through this surface.

/// Record types and database operations
pub mod db;

/// HTTP handlers for gallery endpoints
pub mod handlers;

pub use db::{GalleryEntry, NewGalleryEntry};
