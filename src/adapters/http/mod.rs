//! HTTP adapters - the REST surface of the forum API.
//!
//! Each resource has its own `dto` / `handlers` / `routes` modules; the
//! router below assembles them and layers authentication, tracing, and CORS
//! on top.

pub mod authentications;
pub mod error;
pub mod middleware;
pub mod threads;
pub mod users;

pub use authentications::{authentication_routes, AuthenticationHandlers};
pub use threads::{thread_routes, ThreadHandlers};
pub use users::{user_routes, UserHandlers};

use axum::{middleware::from_fn_with_state, Router};
use serde::Serialize;
use serde_json::{Map, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use middleware::{auth_middleware, AuthState};

/// Success envelope shared by every endpoint: `status` plus an optional
/// `data` payload.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    /// Success with a data payload.
    pub fn with_data(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    /// Success with no payload.
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

/// Merges a JSON body with path/credential fields into one field mapping.
///
/// A non-object body contributes nothing; the entity validators then report
/// the missing properties.
pub(crate) fn merged_payload(body: Value, extra: &[(&str, &str)]) -> Value {
    let mut map = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in extra {
        map.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(map)
}

/// Assembles the application router.
pub fn app_router(
    user_handlers: UserHandlers,
    authentication_handlers: AuthenticationHandlers,
    thread_handlers: ThreadHandlers,
    auth_state: AuthState,
) -> Router {
    Router::new()
        .nest("/users", user_routes(user_handlers))
        .nest(
            "/authentications",
            authentication_routes(authentication_handlers),
        )
        .nest("/threads", thread_routes(thread_handlers))
        .layer(from_fn_with_state(auth_state, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
