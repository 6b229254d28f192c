//! PostgreSQL adapters - database implementations for the repository ports.
//!
//! Repositories allocate resource ids (`<kind>-<suffix>`) through the id
//! generator port and stamp rows with an ISO-8601 write timestamp. Soft
//! deletes flip `is_delete`; rows are never physically removed on the
//! comment/reply delete paths.

mod authentication_repository;
mod comment_repository;
mod reply_repository;
mod thread_repository;
mod user_repository;

pub use authentication_repository::PostgresAuthenticationRepository;
pub use comment_repository::PostgresCommentRepository;
pub use reply_repository::PostgresReplyRepository;
pub use thread_repository::PostgresThreadRepository;
pub use user_repository::PostgresUserRepository;

use chrono::{SecondsFormat, Utc};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Maps a sqlx failure into the domain's database error, keeping the
/// operation context in the message.
pub(crate) fn database_error(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |err| DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}

/// ISO-8601 timestamp captured at write time.
pub(crate) fn write_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
