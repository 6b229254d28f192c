//! Authentication domain - token pair value object.

mod new_auth;

pub use new_auth::NewAuth;
