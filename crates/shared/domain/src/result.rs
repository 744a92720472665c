//! Result convention for recoverable domain failures.
//!
//! Every fallible domain operation returns [`DomainResult`], so call sites
//! must branch on the outcome before using a value.

use crate::error::DomainError;

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Shorthand for a failed validation result.
pub fn fail<T>(msg: impl Into<String>) -> DomainResult<T> {
    Err(DomainError::validation(msg))
}

/// Checked accessors for code that has already established the outcome.
///
/// Calling an accessor against the wrong variant is a programming defect,
/// not a domain failure, and panics.
pub trait ResultExt<T> {
    /// Whether the result holds a value
    fn is_success(&self) -> bool;

    /// Whether the result holds an error
    fn is_failure(&self) -> bool;

    /// Take the value.
    ///
    /// # Panics
    /// Panics with "cannot get value from a failed result" on a failure.
    fn value(self) -> T;

    /// Take the error.
    ///
    /// # Panics
    /// Panics with "cannot get error from a successful result" on a success.
    fn error(self) -> DomainError;
}

impl<T> ResultExt<T> for DomainResult<T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn is_failure(&self) -> bool {
        self.is_err()
    }

    fn value(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => panic!("cannot get value from a failed result"),
        }
    }

    fn error(self) -> DomainError {
        match self {
            Ok(_) => panic!("cannot get error from a successful result"),
            Err(err) => err,
        }
    }
}
