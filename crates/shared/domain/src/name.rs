//! Name value object.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MIN_NAME_LENGTH, NAME_PATTERN};
use crate::result::{fail, DomainResult};

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"));

/// Trimmed person name made of letters and spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    value: String,
}

impl Name {
    /// Validate a raw name.
    ///
    /// Length is checked before the character set, so a one-character
    /// name always reports the length error. Length counts Unicode scalar
    /// values (`char`s), not UTF-16 units: a single emoji is one character.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return fail("name cannot be empty");
        }

        if trimmed.chars().count() < MIN_NAME_LENGTH {
            return fail(format!(
                "name must be at least {} characters",
                MIN_NAME_LENGTH
            ));
        }

        if !NAME_REGEX.is_match(trimmed) {
            return fail("name can only contain letters");
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[test]
    fn test_name_trimmed() {
        let name = Name::new("  Pedro  ").unwrap();
        assert_eq!(name.as_str(), "Pedro");
    }

    #[test]
    fn test_name_accents_allowed() {
        let name = Name::new("José María").unwrap();
        assert_eq!(name.as_str(), "José María");
        assert!(Name::new("Ñandú Öst").is_ok());
    }

    #[test]
    fn test_name_empty() {
        assert_eq!(
            Name::new("  ").unwrap_err(),
            DomainError::validation("name cannot be empty")
        );
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(
            Name::new("A").unwrap_err(),
            DomainError::validation("name must be at least 2 characters")
        );
    }

    #[test]
    fn test_short_name_reports_length_before_charset() {
        for raw in ["1", " 7 ", "!", "é"] {
            assert_eq!(
                Name::new(raw).unwrap_err(),
                DomainError::validation("name must be at least 2 characters"),
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn test_name_with_digits() {
        assert_eq!(
            Name::new("Pedro123").unwrap_err(),
            DomainError::validation("name can only contain letters")
        );
        assert!(Name::new("O'Brien").is_err());
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(
            Name::new("😀").unwrap_err().to_string(),
            "name must be at least 2 characters"
        );
        assert_eq!(
            Name::new("😀😀").unwrap_err().to_string(),
            "name can only contain letters"
        );
        assert!(Name::new("Jó").is_ok());
    }
}
