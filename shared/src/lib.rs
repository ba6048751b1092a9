//! Shared types for the HR backend
//!
//! Types used by the server and by API clients: the error model and its
//! JSON body, entity models with their payloads, and the auth DTOs.

pub mod client;
pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
