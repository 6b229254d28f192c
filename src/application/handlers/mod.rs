//! Use-case orchestrators, one per user action.
//!
//! Each orchestrator is stateless per invocation and walks the same linear
//! shape: validate payload, check ancestors, check ownership where the
//! action mutates an existing resource, execute, return. The first failing
//! step terminates the request.

pub mod auth;
pub mod comment;
pub mod reply;
pub mod thread;
pub mod user;

pub use auth::{LoginUserUseCase, LogoutUserUseCase, RefreshAuthenticationUseCase};
pub use comment::{AddCommentUseCase, DeleteCommentUseCase};
pub use reply::{AddReplyUseCase, DeleteReplyUseCase};
pub use thread::{AddThreadUseCase, GetThreadUseCase};
pub use user::RegisterUserUseCase;
