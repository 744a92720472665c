//! Password value object.
//!
//! Passwords are kept verbatim; hashing is out of scope. The only
//! asymmetry is display: `Display` and `Debug` never reveal the value.

use crate::constants::{MIN_PASSWORD_LENGTH, PASSWORD_MASK};
use crate::result::{fail, DomainResult};

/// Validated plain-text password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    value: String,
}

// Don't expose the value in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &PASSWORD_MASK)
            .finish()
    }
}

impl Password {
    /// Validate a raw password.
    ///
    /// Rules run in order: not blank, minimum length, contains a letter,
    /// contains a digit. The first failing rule determines the error.
    /// Length counts `char`s, so each non-BMP character counts once.
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.trim().is_empty() {
            return fail("password cannot be empty");
        }

        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return fail(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ));
        }

        if !raw.chars().any(|c| c.is_ascii_alphabetic()) {
            return fail("password must contain at least one letter");
        }

        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return fail("password must contain at least one number");
        }

        Ok(Self {
            value: raw.to_string(),
        })
    }

    /// Get the real value (for persistence).
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Compare against a plain-text candidate.
    pub fn matches(&self, plain_text: &str) -> bool {
        self.value == plain_text
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(PASSWORD_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[test]
    fn test_password_valid() {
        let password = Password::new("Pass1234").unwrap();
        assert_eq!(password.as_str(), "Pass1234");
        assert!(password.matches("Pass1234"));
        assert!(!password.matches("pass1234"));
    }

    #[test]
    fn test_password_masked() {
        let password = Password::new("Secret123").unwrap();
        assert_eq!(password.to_string(), "********");
        assert!(!format!("{:?}", password).contains("Secret123"));
    }

    #[test]
    fn test_password_stored_verbatim() {
        let password = Password::new("  Spaced 123  ").unwrap();
        assert_eq!(password.as_str(), "  Spaced 123  ");
    }

    #[test]
    fn test_password_empty() {
        assert_eq!(
            Password::new("        ").unwrap_err(),
            DomainError::validation("password cannot be empty")
        );
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            Password::new("Pass1").unwrap_err(),
            DomainError::validation("password must be at least 8 characters")
        );
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(Password::new("abcdefg1").is_ok());
    }

    #[test]
    fn test_digits_only_reports_missing_letter() {
        for raw in ["12345678", "000000000000"] {
            assert_eq!(
                Password::new(raw).unwrap_err(),
                DomainError::validation("password must contain at least one letter")
            );
        }
    }

    #[test]
    fn test_password_without_number() {
        assert_eq!(
            Password::new("PasswordOnly").unwrap_err(),
            DomainError::validation("password must contain at least one number")
        );
    }

    #[test]
    fn test_length_counts_chars() {
        // Six chars, ten UTF-16 units.
        assert_eq!(
            Password::new("ab1😀😀😀").unwrap_err().to_string(),
            "password must be at least 8 characters"
        );
        assert!(Password::new("ab1😀😀😀😀😀").is_ok());
    }
}
