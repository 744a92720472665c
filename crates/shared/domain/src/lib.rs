//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Value objects can only be built through their validating constructors,
//! so an invalid email, name or password is unrepresentable.

pub mod constants;
pub mod email;
pub mod error;
pub mod name;
pub mod password;
pub mod result;
pub mod user;

pub use constants::*;
pub use email::Email;
pub use error::DomainError;
pub use name::Name;
pub use password::Password;
pub use result::{DomainResult, ResultExt};
pub use user::User;
