//! Domain-level errors.
//!
//! These errors represent business rule violations and validation failures.
//! They are independent of infrastructure concerns (storage, CLI).
//! The `Display` output of every variant is the exact message shown to users.

use thiserror::Error;

/// Domain-specific errors for validation and business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value object or entity invariant was violated
    #[error("{0}")]
    Validation(String),

    /// A user with the same normalized email already exists
    #[error("cannot add user: a user with email {0} already exists.")]
    DuplicateEmail(String),

    /// A user with the same email domain already exists
    #[error("cannot add user: a user with domain {0} already exists.")]
    DuplicateDomain(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Whether this error comes from a uniqueness rule rather than input validation
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateEmail(_) | DomainError::DuplicateDomain(_)
        )
    }
}
