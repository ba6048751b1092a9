//! Application error and its wire envelope

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

/// The one error type crossing store, service and HTTP boundaries
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Structured context, e.g. `{"field": "budget"}`
    pub details: Option<BTreeMap<String, Value>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach one detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ---- validation ----

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// `"{field} is required"`
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    /// `"{field} must be a non-negative number"`
    pub fn negative(field: &str) -> Self {
        Self::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative number"),
        )
        .with_detail("field", field)
    }

    // ---- lookups ----

    /// `"{resource} not found"`
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// `"{resource} already exists"`
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::AlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    // ---- authentication ----

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Never says which of username or password was wrong
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    // ---- system ----

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Error body sent to clients: `{code, message, details?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Value>>,
}

impl From<&AppError> for ApiResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl From<ApiResponse> for AppError {
    fn from(body: ApiResponse) -> Self {
        Self {
            code: body.code,
            message: body.message,
            details: body.details,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Internal details stay in the log
        let body = if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
            ApiResponse::from(&AppError::new(self.code))
        } else {
            ApiResponse::from(&self)
        };

        (self.http_status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_required_and_negative_name_the_field() {
        let err = AppError::required("name");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name is required");
        assert_eq!(err.details.unwrap()["field"], "name");

        let err = AppError::negative("budget");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "budget must be a non-negative number");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_lookup_and_auth_constructors() {
        let err = AppError::not_found("Department 7");
        assert_eq!(err.message, "Department 7 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::already_exists("Tag 'x'");
        assert_eq!(err.message, "Tag 'x' already exists");
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err = AppError::invalid_credentials();
        assert_eq!(err.to_string(), "invalid credentials");
        assert_eq!(err.http_status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_envelope_shape() {
        let body = ApiResponse::from(&AppError::required("description"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 101,
                "message": "description is required",
                "details": { "field": "description" }
            })
        );

        let json = serde_json::to_value(ApiResponse::from(&AppError::unauthorized())).unwrap();
        assert!(json.get("details").is_none());

        let back = AppError::from(body);
        assert_eq!(back.code, ErrorCode::RequiredField);
    }
}
