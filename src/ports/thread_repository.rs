//! Thread repository port.
//!
//! Defines the storage contract for discussion threads. Implementations
//! report storage facts (existence booleans, rows, or `None`); use cases
//! decide what those facts mean.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::thread::{AddedThread, NewThread, Thread};

/// Repository port for thread persistence.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Insert a new thread, allocating its id and write timestamp.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, DomainError>;

    /// Check whether a thread with this id exists.
    async fn is_thread_exist(&self, thread_id: &str) -> Result<bool, DomainError>;

    /// Fetch a thread read model (scalar fields joined with the author's
    /// username), or `None` when absent. Comments are not hydrated here.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Option<Thread>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ThreadRepository) {}
    }
}
