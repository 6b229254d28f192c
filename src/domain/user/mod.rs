//! User domain - registration and login payload validators.

mod register_user;
mod registered_user;
mod user_login;

pub use register_user::{RegisterUser, MAX_USERNAME_LENGTH};
pub use registered_user::RegisteredUser;
pub use user_login::UserLogin;
