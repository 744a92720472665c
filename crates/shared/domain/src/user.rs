//! User domain entity.
//!
//! Identity-based: two users are equal exactly when their ids are equal,
//! regardless of email, name or password.

use uuid::Uuid;

use crate::email::Email;
use crate::name::Name;
use crate::password::Password;
use crate::result::{fail, DomainResult};

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: String,
    email: Email,
    name: Name,
    password: Password,
}

impl User {
    /// Create a new user with a freshly generated id.
    ///
    /// Never fails once the value objects exist; the result keeps the
    /// signature aligned with [`User::reconstruct`].
    pub fn create(email: Email, name: Name, password: Password) -> DomainResult<Self> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            password,
        })
    }

    /// Rehydrate a user with a caller-supplied id (from storage).
    ///
    /// # Errors
    /// Returns `id cannot be empty` when `id` is empty or whitespace-only.
    pub fn reconstruct(
        id: impl Into<String>,
        email: Email,
        name: Name,
        password: Password,
    ) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return fail("id cannot be empty");
        }

        Ok(Self {
            id,
            email,
            name,
            password,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Replace the email in place
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
    }

    /// Replace the name in place
    pub fn update_name(&mut self, name: Name) {
        self.name = name;
    }

    /// Replace the password in place
    pub fn update_password(&mut self, password: Password) {
        self.password = password;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User {{ id: {}, name: {}, email: {} }}",
            self.id, self.name, self.email
        )
    }
}
