//! Error kinds and their HTTP status

use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::codes::ErrorCode;

/// What went wrong, independent of the resource involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input failed a field rule
    Validation,
    /// Referenced id does not exist
    NotFound,
    /// Unique key already taken
    Conflict,
    /// Missing, invalid or expired credentials
    Authentication,
    /// Failure on the server side
    System,
}

impl ErrorCategory {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::System => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed | Self::RequiredField | Self::ValueOutOfRange => {
                ErrorCategory::Validation
            }
            Self::NotFound
            | Self::UserNotFound
            | Self::EmployeeNotFound
            | Self::DepartmentNotFound => ErrorCategory::NotFound,
            Self::AlreadyExists | Self::UsernameExists => ErrorCategory::Conflict,
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => ErrorCategory::Authentication,
            Self::InternalError => ErrorCategory::System,
        }
    }

    /// HTTP status for responses carrying this code
    pub fn http_status(&self) -> StatusCode {
        self.category().http_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_category() {
        assert_eq!(ErrorCode::RequiredField.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ValueOutOfRange.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::DepartmentNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UsernameExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}
