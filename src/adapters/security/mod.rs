//! Security adapters - password hashing, JWT token management, id
//! generation.

mod argon2_password_hasher;
mod jwt_token_manager;
mod uuid_id_generator;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use jwt_token_manager::JwtTokenManager;
pub use uuid_id_generator::UuidIdGenerator;
