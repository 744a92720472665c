//! Storage layer - JSON document holding users and standalone value objects.
//!
//! Records are kept as primitives and rebuilt through the domain
//! constructors on every read.

pub mod audit;
pub mod error;
pub mod json_storage;
pub mod records;

pub use audit::{Collection, ReadMode, Reconstructed, RejectedRecord};
pub use error::StorageError;
pub use json_storage::JsonStorage;
pub use records::{StorageData, UserRecord};
