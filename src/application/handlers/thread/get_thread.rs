//! GetThreadUseCase - assembles the nested thread read model.

use std::sync::Arc;

use crate::application::errors::{ApplicationError, Resource, UseCase};
use crate::domain::thread::Thread;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Read-only composition: thread, its comments, and each comment's replies.
/// Performs no ownership checks.
pub struct GetThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl GetThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<Thread, ApplicationError> {
        let thread = self
            .thread_repository
            .get_thread_by_id(thread_id)
            .await?
            .ok_or(ApplicationError::NotFound {
                use_case: UseCase::GetThread,
                resource: Resource::Thread,
            })?;

        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        // Replies are fetched per comment, sequentially, preserving the
        // comment ordering supplied by storage.
        let mut hydrated = Vec::with_capacity(comments.len());
        for comment in comments {
            let replies = self
                .reply_repository
                .get_replies_by_comment_id(comment.id())
                .await?;
            hydrated.push(comment.with_replies(replies));
        }

        Ok(thread.with_comments(hydrated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::{AddedComment, Comment, NewComment};
    use crate::domain::foundation::DomainError;
    use crate::domain::reply::{AddedReply, NewReply, Reply};
    use crate::domain::thread::{AddedThread, NewThread};
    use async_trait::async_trait;

    struct MockThreadRepository {
        thread: Option<Thread>,
    }

    #[async_trait]
    impl ThreadRepository for MockThreadRepository {
        async fn add_thread(&self, _new_thread: &NewThread) -> Result<AddedThread, DomainError> {
            unreachable!("not used by this use case")
        }

        async fn is_thread_exist(&self, _thread_id: &str) -> Result<bool, DomainError> {
            Ok(self.thread.is_some())
        }

        async fn get_thread_by_id(&self, _thread_id: &str) -> Result<Option<Thread>, DomainError> {
            Ok(self.thread.clone())
        }
    }

    struct MockCommentRepository {
        comments: Vec<Comment>,
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
            Ok(true)
        }

        async fn is_comment_owner(
            &self,
            _comment_id: &str,
            _owner: &str,
        ) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn delete_comment(&self, _comment_id: &str) -> Result<(), DomainError> {
            Ok(())
        }

        async fn get_comments_by_thread_id(
            &self,
            _thread_id: &str,
        ) -> Result<Vec<Comment>, DomainError> {
            Ok(self.comments.clone())
        }
    }

    struct MockReplyRepository {
        replies: Vec<Reply>,
    }

    #[async_trait]
    impl ReplyRepository for MockReplyRepository {
        async fn add_reply(&self, _new_reply: &NewReply) -> Result<AddedReply, DomainError> {
            unreachable!("not used by this use case")
        }

        async fn is_reply_exist(
            &self,
            _reply_id: &str,
            _comment_id: &str,
        ) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn is_reply_owner(&self, _reply_id: &str, _owner: &str) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn delete_reply(&self, _reply_id: &str) -> Result<(), DomainError> {
            Ok(())
        }

        async fn get_replies_by_comment_id(
            &self,
            _comment_id: &str,
        ) -> Result<Vec<Reply>, DomainError> {
            Ok(self.replies.clone())
        }
    }

    fn use_case_with(
        thread: Option<Thread>,
        comments: Vec<Comment>,
        replies: Vec<Reply>,
    ) -> GetThreadUseCase {
        GetThreadUseCase::new(
            Arc::new(MockThreadRepository { thread }),
            Arc::new(MockCommentRepository { comments }),
            Arc::new(MockReplyRepository { replies }),
        )
    }

    fn dummy_thread() -> Thread {
        Thread::new(
            "thread-123".to_string(),
            "dummy title".to_string(),
            "dummy body".to_string(),
            "2024-01-01T00:00:00.000Z".to_string(),
            "bimantoro".to_string(),
        )
    }

    fn dummy_comment(is_delete: bool) -> Comment {
        Comment::new(
            "comment-123".to_string(),
            "bimantoro".to_string(),
            "2024-01-02T00:00:00.000Z".to_string(),
            "dummy content".to_string(),
            is_delete,
        )
    }

    #[tokio::test]
    async fn fails_when_thread_is_not_found() {
        let use_case = use_case_with(None, vec![], vec![]);
        let err = use_case.execute("thread-123").await.unwrap_err();
        assert_eq!(err.to_string(), "GET_THREAD_USE_CASE.THREAD_NOT_FOUND");
    }

    #[tokio::test]
    async fn assembles_thread_with_comments_and_replies() {
        let reply = Reply::new(
            "reply-123".to_string(),
            "johndoe".to_string(),
            "2024-01-03T00:00:00.000Z".to_string(),
            "a reply".to_string(),
            false,
        );
        let use_case = use_case_with(
            Some(dummy_thread()),
            vec![dummy_comment(false)],
            vec![reply],
        );

        let thread = use_case.execute("thread-123").await.unwrap();

        assert_eq!(thread.id(), "thread-123");
        assert_eq!(thread.title(), "dummy title");
        assert_eq!(thread.username(), "bimantoro");
        assert_eq!(thread.comments().len(), 1);
        assert_eq!(thread.comments()[0].content(), "dummy content");
        assert_eq!(thread.comments()[0].replies().len(), 1);
        assert_eq!(thread.comments()[0].replies()[0].content(), "a reply");
    }

    #[tokio::test]
    async fn live_comment_content_is_passed_through_unmodified() {
        let use_case = use_case_with(Some(dummy_thread()), vec![dummy_comment(false)], vec![]);
        let thread = use_case.execute("thread-123").await.unwrap();
        assert_eq!(thread.comments()[0].content(), "dummy content");
    }

    #[tokio::test]
    async fn deleted_comment_content_is_masked_with_the_tombstone() {
        let use_case = use_case_with(Some(dummy_thread()), vec![dummy_comment(true)], vec![]);
        let thread = use_case.execute("thread-123").await.unwrap();
        assert_eq!(
            thread.comments()[0].content(),
            "**komentar telah dihapus**"
        );
    }
}
