//! Email and password checks for registration and login.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Canonical form used for storage and lookup: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Reject strings that are not syntactically valid email addresses.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation("Email address is invalid".into()));
    }
    Ok(())
}

/// Validate that a password meets the minimum length requirement.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.chars().count() < min_length {
        return Err(CoreError::Validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}
