//! Data models
//!
//! Shared between hr-server and frontend (via API).
//! All IDs are `i64`; entity JSON uses camelCase field names.

pub mod department;
pub mod employee;
pub mod user;

// Re-exports
pub use department::*;
pub use employee::*;
pub use user::*;
