//! Service layer - application use cases.

pub mod add_user;
pub mod get_all_users;

pub use add_user::{AddUser, AddUserRequest};
pub use get_all_users::GetAllUsers;
