//! User Service Library
//!
//! Storage, repositories and use cases for the user directory. The CLI
//! builds one [`JsonStorage`] at startup and hands it to the repository
//! adapters; tests do the same with a temporary file.

pub mod repository;
pub mod service;
pub mod storage;

use std::sync::Arc;

pub use repository::{InMemoryUserRepository, StorageUserRepository, UserRepository};
pub use service::{AddUser, AddUserRequest, GetAllUsers};
pub use storage::{JsonStorage, ReadMode, Reconstructed, RejectedRecord, StorageError};

/// Storage-backed repository over a shared storage instance.
pub fn storage_repository(storage: &Arc<JsonStorage>) -> Arc<dyn UserRepository> {
    Arc::new(StorageUserRepository::new(Arc::clone(storage)))
}
