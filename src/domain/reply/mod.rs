//! Reply domain - payload validators and read model with tombstoning.

mod added_reply;
mod delete_reply;
mod new_reply;
#[allow(clippy::module_inception)]
mod reply;

pub use added_reply::AddedReply;
pub use delete_reply::DeleteReply;
pub use new_reply::NewReply;
pub use reply::{Reply, DELETED_REPLY_CONTENT};
