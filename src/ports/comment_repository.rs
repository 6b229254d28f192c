//! Comment repository port.

use async_trait::async_trait;

use crate::domain::comment::{AddedComment, Comment, NewComment};
use crate::domain::foundation::DomainError;

/// Repository port for comment persistence and soft deletion.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment, allocating its id and write timestamp.
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, DomainError>;

    /// Check whether a comment with this id exists under the given thread.
    async fn is_comment_exist(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<bool, DomainError>;

    /// Check whether the comment's stored owner matches `owner`.
    ///
    /// Returns `false` when the comment does not exist; existence is the
    /// caller's concern and is checked first.
    async fn is_comment_owner(&self, comment_id: &str, owner: &str) -> Result<bool, DomainError>;

    /// Soft-delete: set the `is_delete` flag. The row is never removed.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError>;

    /// Fetch the thread's comments joined with author usernames, ordered by
    /// date ascending.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<Comment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CommentRepository) {}
    }
}
