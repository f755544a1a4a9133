//! Input validation for account, fleet, and directory fields.

use thiserror::Error;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Invalid email format.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    /// Value too long.
    #[error("{field} is too long ({actual} chars, max {max})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// Empty value where one is required.
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    /// Value outside a closed set of choices.
    #[error("{field} must be one of: {}", .allowed.join(", "))]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
    },
}

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum allowed length for names, types, and other short labels.
pub const MAX_LABEL_LENGTH: usize = 200;

/// Maximum allowed length for a plaintext password.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// Validate an email address (basic local@domain.tld check).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = validate_required("email", email, MAX_EMAIL_LENGTH)?;

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    };

    if domain.contains('@') {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    }

    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing local part (before @)".to_string(),
        ));
    }

    if domain.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing domain (after @)".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain at least one dot".to_string(),
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail(
            "domain cannot start or end with a dot".to_string(),
        ));
    }

    if domain.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "domain cannot contain consecutive dots".to_string(),
        ));
    }

    Ok(())
}

/// Check that a field is non-blank and at most `max` characters.
///
/// Returns the trimmed value.
pub fn validate_required<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(trimmed)
}

/// Check that a field is one of `allowed` (exact, after trimming).
pub fn validate_one_of<'a>(
    field: &'static str,
    value: &'a str,
    allowed: &'static [&'static str],
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();

    if allowed.iter().any(|choice| *choice == trimmed) {
        Ok(trimmed)
    } else {
        Err(ValidationError::NotAllowed { field, allowed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("ops.desk@shipping.co.uk").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email(" test@example.com ").is_ok()); // trimmed
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(matches!(validate_email(""), Err(ValidationError::Empty("email"))));

        for bad in [
            "test.example.com",
            "test@example@com",
            "@example.com",
            "test@",
            "test@localhost",
            "test@.example.com",
            "test@example.com.",
            "test@example..com",
        ] {
            assert!(
                matches!(validate_email(bad), Err(ValidationError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            validate_email(&email),
            Err(ValidationError::TooLong { field: "email", .. })
        ));
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", "  Atlas Star ", 50), Ok("Atlas Star"));
        assert_eq!(
            validate_required("name", "   ", 50),
            Err(ValidationError::Empty("name"))
        );
        assert_eq!(
            validate_required("name", "abcdef", 3),
            Err(ValidationError::TooLong {
                field: "name",
                max: 3,
                actual: 6
            })
        );
    }

    #[test]
    fn test_validate_one_of() {
        const TIERS: &[&str] = &["platinum", "free"];
        assert_eq!(validate_one_of("tier", " free", TIERS), Ok("free"));
        assert!(matches!(
            validate_one_of("tier", "gold", TIERS),
            Err(ValidationError::NotAllowed { field: "tier", .. })
        ));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidEmail("test message".to_string());
        assert_eq!(err.to_string(), "Invalid email: test message");

        let err = ValidationError::TooLong {
            field: "email",
            max: 254,
            actual: 300,
        };
        assert_eq!(err.to_string(), "email is too long (300 chars, max 254)");

        let err = ValidationError::NotAllowed {
            field: "tier",
            allowed: &["platinum", "free"],
        };
        assert_eq!(err.to_string(), "tier must be one of: platinum, free");
    }
}
