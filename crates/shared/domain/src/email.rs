//! Email value object.
//!
//! Always holds the normalized (trimmed, lowercased) address, so equality
//! is plain string equality.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::EMAIL_PATTERN;
use crate::result::{fail, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Validated, normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    /// Validate and normalize a raw email address.
    ///
    /// # Errors
    /// - `email cannot be empty` for empty or whitespace-only input
    /// - `email format is invalid` when the raw input is not `local@domain.tld`
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.trim().is_empty() {
            return fail("email cannot be empty");
        }

        if !EMAIL_REGEX.is_match(raw) {
            return fail("email format is invalid");
        }

        Ok(Self {
            value: raw.trim().to_lowercase(),
        })
    }

    /// Everything after the first `@`.
    pub fn domain(&self) -> &str {
        self.value
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }

    /// Get the normalized address.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the normalized address.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}
