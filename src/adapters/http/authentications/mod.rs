//! Authentications HTTP resource.

mod dto;
mod handlers;
mod routes;

pub use handlers::AuthenticationHandlers;
pub use routes::authentication_routes;
