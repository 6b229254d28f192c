//! User use cases.

mod register_user;

pub use register_user::RegisterUserUseCase;
