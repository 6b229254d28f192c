//! DeleteCommentUseCase - soft-deletes a comment after ownership checks.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::{ApplicationError, UseCase};
use crate::application::pipeline;
use crate::domain::comment::DeleteComment;
use crate::ports::{CommentRepository, ThreadRepository};

/// Use case for soft-deleting a comment. Runs the full authorization
/// pipeline - thread existence, comment existence, comment ownership - before
/// the single mutation.
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<(), ApplicationError> {
        let delete_comment = DeleteComment::from_payload(payload)?;

        pipeline::ensure_thread_exists(
            UseCase::DeleteComment,
            self.thread_repository.as_ref(),
            &delete_comment.thread_id,
        )
        .await?;

        pipeline::ensure_comment_exists(
            UseCase::DeleteComment,
            self.comment_repository.as_ref(),
            &delete_comment.id,
            &delete_comment.thread_id,
        )
        .await?;

        pipeline::ensure_comment_owned(
            UseCase::DeleteComment,
            self.comment_repository.as_ref(),
            &delete_comment.id,
            &delete_comment.owner,
        )
        .await?;

        Ok(self
            .comment_repository
            .delete_comment(&delete_comment.id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::{AddedComment, Comment, NewComment};
    use crate::domain::foundation::DomainError;
    use crate::domain::thread::{AddedThread, NewThread, Thread};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct MockThreadRepository {
        exists: bool,
    }

    #[async_trait]
    impl ThreadRepository for MockThreadRepository {
        async fn add_thread(&self, _new_thread: &NewThread) -> Result<AddedThread, DomainError> {
            unreachable!("not used by this use case")
        }

        async fn is_thread_exist(&self, _thread_id: &str) -> Result<bool, DomainError> {
            Ok(self.exists)
        }

        async fn get_thread_by_id(&self, _thread_id: &str) -> Result<Option<Thread>, DomainError> {
            Ok(None)
        }
    }

    struct MockCommentRepository {
        exists: bool,
        owned: bool,
        deleted: Mutex<Vec<String>>,
    }

    impl MockCommentRepository {
        fn with(exists: bool, owned: bool) -> Self {
            Self {
                exists,
                owned,
                deleted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepository {
        async fn add_comment(
            &self,
            _new_comment: &NewComment,
        ) -> Result<AddedComment, DomainError> {
            unreachable!("not used by this use case")
        }

        async fn is_comment_exist(
            &self,
            _comment_id: &str,
            _thread_id: &str,
        ) -> Result<bool, DomainError> {
            Ok(self.exists)
        }

        async fn is_comment_owner(
            &self,
            _comment_id: &str,
            _owner: &str,
        ) -> Result<bool, DomainError> {
            Ok(self.owned)
        }

        async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError> {
            self.deleted.lock().unwrap().push(comment_id.to_string());
            Ok(())
        }

        async fn get_comments_by_thread_id(
            &self,
            _thread_id: &str,
        ) -> Result<Vec<Comment>, DomainError> {
            Ok(vec![])
        }
    }

    fn payload() -> serde_json::Value {
        json!({
            "id": "comment-123",
            "threadId": "thread-123",
            "owner": "user-123",
        })
    }

    #[tokio::test]
    async fn orchestrates_the_delete_comment_action_correctly() {
        let comments = Arc::new(MockCommentRepository::with(true, true));
        let threads = Arc::new(MockThreadRepository { exists: true });
        let use_case = DeleteCommentUseCase::new(comments.clone(), threads);

        use_case.execute(&payload()).await.unwrap();

        assert_eq!(
            comments.deleted.lock().unwrap().as_slice(),
            ["comment-123".to_string()]
        );
    }

    #[tokio::test]
    async fn fails_when_thread_is_missing() {
        let comments = Arc::new(MockCommentRepository::with(true, true));
        let threads = Arc::new(MockThreadRepository { exists: false });
        let use_case = DeleteCommentUseCase::new(comments.clone(), threads);

        let err = use_case.execute(&payload()).await.unwrap_err();

        assert_eq!(err.to_string(), "DELETE_COMMENT_USE_CASE.THREAD_NOT_FOUND");
        assert!(comments.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fails_when_comment_is_missing() {
        let comments = Arc::new(MockCommentRepository::with(false, true));
        let threads = Arc::new(MockThreadRepository { exists: true });
        let use_case = DeleteCommentUseCase::new(comments.clone(), threads);

        let err = use_case.execute(&payload()).await.unwrap_err();

        assert_eq!(err.to_string(), "DELETE_COMMENT_USE_CASE.COMMENT_NOT_FOUND");
        assert!(comments.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fails_when_caller_is_not_the_owner_without_deleting() {
        let comments = Arc::new(MockCommentRepository::with(true, false));
        let threads = Arc::new(MockThreadRepository { exists: true });
        let use_case = DeleteCommentUseCase::new(comments.clone(), threads);

        let err = use_case.execute(&payload()).await.unwrap_err();

        assert_eq!(err.to_string(), "DELETE_COMMENT_USE_CASE.COMMENT_NOT_OWNED");
        assert!(comments.deleted.lock().unwrap().is_empty());
    }
}
