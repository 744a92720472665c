//! Get all users use case.

use std::sync::Arc;

use domain::User;

use crate::repository::UserRepository;

/// Lists every user the repository can currently read.
pub struct GetAllUsers {
    repo: Arc<dyn UserRepository>,
}

impl GetAllUsers {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> Vec<User> {
        self.repo.find_all()
    }
}
