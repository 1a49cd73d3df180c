//! `/api/users` handlers and their wire types

pub mod create;
pub mod list;
pub mod types;

pub use create::create_user;
pub use list::list_users;
pub use types::{CreateUserRequest, CreatedUserResponse, UserResponse};
