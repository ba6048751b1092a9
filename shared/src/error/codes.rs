//! Stable numeric error codes
//!
//! - 1xx: field validation
//! - 2xx: generic resource lookups and conflicts
//! - 1xxx: authentication
//! - 3xxx: users
//! - 4xxx: employees
//! - 5xxx: departments
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body
///
/// Serialized as its number so clients can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    ValidationFailed = 100,
    RequiredField = 101,
    ValueOutOfRange = 102,

    NotFound = 200,
    AlreadyExists = 201,

    NotAuthenticated = 1001,
    /// Wrong password and unknown username share this code
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    TokenInvalid = 1004,

    UserNotFound = 3001,
    UsernameExists = 3002,

    EmployeeNotFound = 4001,

    DepartmentNotFound = 5001,

    InternalError = 9001,
}

impl ErrorCode {
    const ALL: [ErrorCode; 14] = [
        ErrorCode::ValidationFailed,
        ErrorCode::RequiredField,
        ErrorCode::ValueOutOfRange,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::TokenExpired,
        ErrorCode::TokenInvalid,
        ErrorCode::UserNotFound,
        ErrorCode::UsernameExists,
        ErrorCode::EmployeeNotFound,
        ErrorCode::DepartmentNotFound,
        ErrorCode::InternalError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message when no specific one is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "invalid credentials",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UsernameExists => "Username already exists",
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_round_trips_through_u16() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::UserNotFound).unwrap();
        assert_eq!(json, "3001");

        let code: ErrorCode = serde_json::from_str("1004").unwrap();
        assert_eq!(code, ErrorCode::TokenInvalid);
        assert!(serde_json::from_str::<ErrorCode>("6").is_err());
    }

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        assert_eq!(ErrorCode::InvalidCredentials.message(), "invalid credentials");
    }
}
