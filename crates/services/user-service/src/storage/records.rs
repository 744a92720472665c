//! Primitive records as they appear in the JSON document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use domain::{DomainResult, Email, Name, Password, User};

/// The whole persisted document.
///
/// Missing or non-array collections read as empty. Entries of the wrong
/// shape are kept as empty values, so they fail revalidation one by one
/// and never take the rest of the document down with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageData {
    #[serde(default, deserialize_with = "lenient_records")]
    pub users: Vec<UserRecord>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub emails: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub names: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub passwords: Vec<String>,
}

impl StorageData {
    /// Whether every collection is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.emails.is_empty()
            && self.names.is_empty()
            && self.passwords.is_empty()
    }
}

/// Primitive projection of a [`User`].
///
/// Missing, `null` or non-string fields deserialize as empty strings so that
/// a damaged entry is rejected on revalidation instead of invalidating the
/// whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
}

impl UserRecord {
    /// Revalidate every field and rebuild the entity.
    pub fn to_user(&self) -> DomainResult<User> {
        let email = Email::new(&self.email)?;
        let name = Name::new(&self.name)?;
        let password = Password::new(&self.password)?;

        User::reconstruct(self.id.clone(), email, name, password)
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().as_str().to_string(),
            name: user.name().as_str().to_string(),
            password: user.password().as_str().to_string(),
        }
    }
}

// =============================================================================
// Lenient deserialization
// =============================================================================

fn string_or_empty(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}

fn array_or_empty(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_empty(Value::deserialize(deserializer)?))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = array_or_empty(Value::deserialize(deserializer)?);
    Ok(items.into_iter().map(string_or_empty).collect())
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<UserRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = array_or_empty(Value::deserialize(deserializer)?);
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}
