//! Repository layer - narrow persistence interface consumed by use cases.

pub mod in_memory;
pub mod storage_repository;
pub mod user_repository;

pub use in_memory::InMemoryUserRepository;
pub use storage_repository::StorageUserRepository;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
