pub mod error;
mod fixture;
pub mod model;
pub mod store;
pub mod validate;

mod create_user;
mod delete_user;
mod get_user;
mod handler;
mod list_users;
mod patch_user;
mod update_user;

pub use create_user::CreateUser;
pub use handler::Handler;
pub use list_users::ListFilter;
pub use patch_user::PatchUser;
pub use update_user::UpdateUser;

#[cfg(test)]
pub(crate) use fixture::*;
