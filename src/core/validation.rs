//! Client-side validation for the sign-in form.
//!
//! The site has no backend, so these checks exist purely to give immediate
//! feedback in the login dialog before it closes.

use thiserror::Error;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation failure for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
}

/// Validate an email address.
///
/// Intentionally loose: one `@` with a dot somewhere after it. Anything
/// stricter belongs to whatever service eventually receives the form.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }

    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(FieldError::EmailInvalid),
    }
}

/// Validate a password.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.domain.io").is_ok());
        // Surrounding whitespace is tolerated
        assert!(validate_email("  user@example.com  ").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("   "), Err(FieldError::EmailRequired));
    }

    #[test]
    fn test_malformed_email() {
        assert_eq!(validate_email("no-at-sign"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("@example.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("user@nodot"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("exactly8!").is_ok());
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(validate_password(""), Err(FieldError::PasswordRequired));
    }

    #[test]
    fn test_short_password() {
        assert_eq!(validate_password("short"), Err(FieldError::PasswordTooShort));
        assert_eq!(
            validate_password("1234567"),
            Err(FieldError::PasswordTooShort)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
