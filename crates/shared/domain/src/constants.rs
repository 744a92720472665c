//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length, counted in characters after trimming
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Email shape: `local@domain.tld`, no whitespace, a single `@`
pub const EMAIL_PATTERN: &str = r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Latin letters (including the accented Latin-1 range) and whitespace
pub const NAME_PATTERN: &str = r"^[a-zA-ZÀ-ÿ\s]+$";

// =============================================================================
// Display
// =============================================================================

/// Literal shown wherever a password would otherwise be displayed
pub const PASSWORD_MASK: &str = "********";
