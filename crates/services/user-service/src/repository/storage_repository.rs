//! Repository adapter over [`JsonStorage`].

use std::sync::Arc;

use domain::User;

use super::user_repository::{normalize_email, UserRepository};
use crate::storage::JsonStorage;

/// User repository backed by the JSON storage.
///
/// Reads go through storage revalidation, so users whose records no
/// longer pass validation are invisible here as well.
pub struct StorageUserRepository {
    storage: Arc<JsonStorage>,
}

impl StorageUserRepository {
    /// Create new repository instance over a shared storage
    pub fn new(storage: Arc<JsonStorage>) -> Self {
        Self { storage }
    }
}

impl UserRepository for StorageUserRepository {
    fn save(&self, user: &User) {
        self.storage.add_user(user);
    }

    fn find_all(&self) -> Vec<User> {
        self.storage.all_users()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email);
        self.storage
            .all_users()
            .into_iter()
            .find(|user| user.email().as_str() == email)
    }
}
