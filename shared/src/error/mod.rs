//! Error model shared by the server and its clients
//!
//! - [`ErrorCode`]: stable numeric codes
//! - [`ErrorCategory`]: validation, not-found, conflict, authentication or
//!   system, which also fixes the HTTP status
//! - [`AppError`]: code + message + optional details
//! - [`ApiResponse`]: the JSON error body
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCategory};
//!
//! let err = AppError::required("name");
//! assert_eq!(err.code.category(), ErrorCategory::Validation);
//! let body = ApiResponse::from(&err);
//! assert_eq!(body.message, "name is required");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
