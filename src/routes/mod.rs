//! Routes Module
//!
//! Assembly of the HTTP route table. All handlers live with their domain
//! modules; this module only wires method+path to handler and applies the
//! session middleware to the protected routes.

pub mod router;

pub use router::create_router;
