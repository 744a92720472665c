//! User repository contract.

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations decide how storage failures are handled; none of the
/// operations report them to the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Persist a user
    fn save(&self, user: &User);

    /// All users currently readable
    fn find_all(&self) -> Vec<User>;

    /// Find a user by email; the input is trimmed and lowercased before matching
    fn find_by_email(&self, email: &str) -> Option<User>;
}

/// Normalize an email lookup key the same way [`domain::Email`] normalizes values.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
