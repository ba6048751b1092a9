//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! entity stores before any mutation.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: department, employee, username
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and addresses
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, employee code, position
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing), in bytes; bcrypt ignores anything past 72
pub const MAX_PASSWORD_BYTES: usize = 72;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty after trimming and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit (empty is allowed).
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a number is finite and not negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::negative(field));
    }
    Ok(())
}

/// Validate that a required number is present, finite and not negative.
pub fn validate_required_amount(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    let value = value.ok_or_else(|| AppError::required(field))?;
    validate_non_negative(value, field)?;
    Ok(value)
}

/// Validate a required email address: non-empty, bounded, `local@domain`.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::validation(format!("{field} must be a valid email address"))
            .with_detail("field", field)),
    }
}

/// Validate an optional email address; empty strings are accepted.
pub fn validate_optional_email(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_email(value, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text_rejects_blank() {
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name is required");

        assert!(validate_required_text(" Engineering ", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_text_len_counts_chars() {
        assert!(validate_text_len("技术部", "name", 3).is_ok());
        let err = validate_text_len("abcd", "name", 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative(0.0, "budget").is_ok());
        assert!(validate_non_negative(10.5, "budget").is_ok());

        let err = validate_non_negative(-1.0, "budget").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "budget must be a non-negative number");

        assert!(validate_non_negative(f64::NAN, "budget").is_err());
        assert!(validate_non_negative(f64::INFINITY, "budget").is_err());
    }

    #[test]
    fn test_required_amount_distinguishes_missing_from_negative() {
        let err = validate_required_amount(None, "budget").unwrap_err();
        assert_eq!(err.message, "budget is required");

        let err = validate_required_amount(Some(-5.0), "budget").unwrap_err();
        assert_eq!(err.message, "budget must be a non-negative number");

        assert_eq!(validate_required_amount(Some(42.0), "budget").unwrap(), 42.0);
    }

    #[test]
    fn test_email() {
        assert!(validate_email("hr@example.com", "email").is_ok());
        assert!(validate_email("no-at-sign", "email").is_err());
        assert!(validate_email("@example.com", "email").is_err());
        assert!(validate_optional_email("", "email").is_ok());
        assert!(validate_optional_email("bad", "email").is_err());
    }
}
