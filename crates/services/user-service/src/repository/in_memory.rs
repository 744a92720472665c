//! In-memory user repository implementation

use std::sync::{PoisonError, RwLock};

use domain::User;

use super::user_repository::{normalize_email, UserRepository};

/// In-memory implementation of UserRepository
///
/// Saving a user whose id is already present replaces the stored copy.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: &User) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        match users.iter_mut().find(|existing| existing.id() == user.id()) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
    }

    fn find_all(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email);
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|user| user.email().as_str() == email)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Email, Name, Password};

    fn user(id: &str, email: &str) -> User {
        User::reconstruct(
            id,
            Email::new(email).unwrap(),
            Name::new("Test User").unwrap(),
            Password::new("Pass1234").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_save_replaces_same_id() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("u1", "old@example.com"));
        repo.save(&user("u1", "new@example.com"));

        let users = repo.find_all();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email().as_str(), "new@example.com");
    }

    #[test]
    fn test_find_by_email_normalizes_input() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("u1", "user@test.com"));

        let found = repo.find_by_email("  USER@Test.com ").unwrap();
        assert_eq!(found.id(), "u1");
        assert!(repo.find_by_email("other@test.com").is_none());
    }

    #[test]
    fn test_find_all_returns_copy() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("u1", "a@test.com"));

        let mut snapshot = repo.find_all();
        snapshot.clear();

        assert_eq!(repo.find_all().len(), 1);
    }
}
