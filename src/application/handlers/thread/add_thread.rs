//! AddThreadUseCase - opens a new discussion thread.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::ApplicationError;
use crate::domain::thread::{AddedThread, NewThread};
use crate::ports::ThreadRepository;

/// Use case for opening a thread. Threads are top-level, so no ancestor
/// checks run; the payload is validated and the effect performed.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedThread, ApplicationError> {
        let new_thread = NewThread::from_payload(payload)?;
        Ok(self.thread_repository.add_thread(&new_thread).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use crate::domain::thread::Thread;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct MockThreadRepository {
        added: Mutex<Vec<NewThread>>,
    }

    impl MockThreadRepository {
        fn new() -> Self {
            Self {
                added: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ThreadRepository for MockThreadRepository {
        async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, DomainError> {
            self.added.lock().unwrap().push(new_thread.clone());
            Ok(AddedThread::new(
                "thread-123".to_string(),
                new_thread.title.clone(),
                new_thread.owner.clone(),
            ))
        }

        async fn is_thread_exist(&self, _thread_id: &str) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn get_thread_by_id(&self, _thread_id: &str) -> Result<Option<Thread>, DomainError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn orchestrates_the_add_thread_action_correctly() {
        let repository = Arc::new(MockThreadRepository::new());
        let use_case = AddThreadUseCase::new(repository.clone());

        let payload = json!({ "title": "a thread", "body": "a body", "owner": "user-123" });
        let added = use_case.execute(&payload).await.unwrap();

        assert_eq!(
            added,
            AddedThread::new(
                "thread-123".to_string(),
                "a thread".to_string(),
                "user-123".to_string(),
            )
        );
        let recorded = repository.added.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].title, "a thread");
        assert_eq!(recorded[0].body, "a body");
    }

    #[tokio::test]
    async fn invalid_payload_fails_before_any_repository_call() {
        let repository = Arc::new(MockThreadRepository::new());
        let use_case = AddThreadUseCase::new(repository.clone());

        let payload = json!({ "title": "a thread" });
        let err = use_case.execute(&payload).await.unwrap_err();

        assert_eq!(err.code(), "NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY");
        assert!(repository.added.lock().unwrap().is_empty());
    }
}
