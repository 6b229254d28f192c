//! Authorization pipeline - ordered existence and ownership checks.
//!
//! Every mutating use case runs the same shape before touching storage:
//! resolve the outermost ancestor first, then each inner level, then (for
//! deletes) ownership of the target. Checks are awaited strictly
//! sequentially and short-circuit on the first failure, so the caller always
//! receives the most specific diagnostic - a missing thread reports
//! `THREAD_NOT_FOUND`, never a generic miss on the leaf.
//!
//! Ownership is only checked after existence is established, and only for
//! mutation of an existing resource; creation has no prior owner to compare
//! against.
//!
//! These checks are not atomic with the effect that follows them. A race
//! between a check and the later delete is accepted at this layer; the
//! storage schema's foreign keys prevent dangling references.

use crate::domain::foundation::DomainError;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

use super::errors::{ApplicationError, Resource, UseCase};

/// Fail with `<use_case>.THREAD_NOT_FOUND` unless the thread exists.
pub(crate) async fn ensure_thread_exists(
    use_case: UseCase,
    threads: &dyn ThreadRepository,
    thread_id: &str,
) -> Result<(), ApplicationError> {
    exists_or_not_found(
        threads.is_thread_exist(thread_id).await,
        use_case,
        Resource::Thread,
    )
}

/// Fail with `<use_case>.COMMENT_NOT_FOUND` unless the comment exists under
/// the given thread.
pub(crate) async fn ensure_comment_exists(
    use_case: UseCase,
    comments: &dyn CommentRepository,
    comment_id: &str,
    thread_id: &str,
) -> Result<(), ApplicationError> {
    exists_or_not_found(
        comments.is_comment_exist(comment_id, thread_id).await,
        use_case,
        Resource::Comment,
    )
}

/// Fail with `<use_case>.REPLY_NOT_FOUND` unless the reply exists under the
/// given comment.
pub(crate) async fn ensure_reply_exists(
    use_case: UseCase,
    replies: &dyn ReplyRepository,
    reply_id: &str,
    comment_id: &str,
) -> Result<(), ApplicationError> {
    exists_or_not_found(
        replies.is_reply_exist(reply_id, comment_id).await,
        use_case,
        Resource::Reply,
    )
}

/// Fail with `<use_case>.COMMENT_NOT_OWNED` unless the comment's stored
/// owner matches the acting user.
pub(crate) async fn ensure_comment_owned(
    use_case: UseCase,
    comments: &dyn CommentRepository,
    comment_id: &str,
    owner: &str,
) -> Result<(), ApplicationError> {
    owned_or_not_owned(
        comments.is_comment_owner(comment_id, owner).await,
        use_case,
        Resource::Comment,
    )
}

/// Fail with `<use_case>.REPLY_NOT_OWNED` unless the reply's stored owner
/// matches the acting user.
pub(crate) async fn ensure_reply_owned(
    use_case: UseCase,
    replies: &dyn ReplyRepository,
    reply_id: &str,
    owner: &str,
) -> Result<(), ApplicationError> {
    owned_or_not_owned(
        replies.is_reply_owner(reply_id, owner).await,
        use_case,
        Resource::Reply,
    )
}

fn exists_or_not_found(
    outcome: Result<bool, DomainError>,
    use_case: UseCase,
    resource: Resource,
) -> Result<(), ApplicationError> {
    match outcome? {
        true => Ok(()),
        false => Err(ApplicationError::NotFound { use_case, resource }),
    }
}

fn owned_or_not_owned(
    outcome: Result<bool, DomainError>,
    use_case: UseCase,
    resource: Resource,
) -> Result<(), ApplicationError> {
    match outcome? {
        true => Ok(()),
        false => Err(ApplicationError::NotOwned { use_case, resource }),
    }
}
