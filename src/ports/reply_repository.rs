//! Reply repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::reply::{AddedReply, NewReply, Reply};

/// Repository port for reply persistence and soft deletion.
///
/// Mirrors [`crate::ports::CommentRepository`] one nesting level down.
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Insert a new reply, allocating its id and write timestamp.
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply, DomainError>;

    /// Check whether a reply with this id exists under the given comment.
    async fn is_reply_exist(&self, reply_id: &str, comment_id: &str)
        -> Result<bool, DomainError>;

    /// Check whether the reply's stored owner matches `owner`.
    async fn is_reply_owner(&self, reply_id: &str, owner: &str) -> Result<bool, DomainError>;

    /// Soft-delete: set the `is_delete` flag. The row is never removed.
    async fn delete_reply(&self, reply_id: &str) -> Result<(), DomainError>;

    /// Fetch the comment's replies joined with author usernames, ordered by
    /// date ascending.
    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<Reply>, DomainError>;
}
