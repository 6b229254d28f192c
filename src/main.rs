//! Process bootstrap: configuration, tracing, database pool, explicit
//! adapter wiring, HTTP server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use forum_api::adapters::http::{
    app_router, AuthenticationHandlers, ThreadHandlers, UserHandlers,
};
use forum_api::adapters::postgres::{
    PostgresAuthenticationRepository, PostgresCommentRepository, PostgresReplyRepository,
    PostgresThreadRepository, PostgresUserRepository,
};
use forum_api::adapters::security::{Argon2PasswordHasher, JwtTokenManager, UuidIdGenerator};
use forum_api::application::handlers::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetThreadUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshAuthenticationUseCase, RegisterUserUseCase,
};
use forum_api::config::AppConfig;
use forum_api::ports::{
    AuthenticationRepository, AuthenticationTokenManager, CommentRepository, IdGenerator,
    PasswordHasher, ReplyRepository, ThreadRepository, UserRepository,
};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to PostgreSQL");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        tracing::info!("database migrations applied");
    }

    // Explicit constructor wiring, once, at startup.
    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let token_manager: Arc<dyn AuthenticationTokenManager> =
        Arc::new(JwtTokenManager::new(&config.auth));

    let thread_repository: Arc<dyn ThreadRepository> = Arc::new(PostgresThreadRepository::new(
        pool.clone(),
        id_generator.clone(),
    ));
    let comment_repository: Arc<dyn CommentRepository> = Arc::new(
        PostgresCommentRepository::new(pool.clone(), id_generator.clone()),
    );
    let reply_repository: Arc<dyn ReplyRepository> = Arc::new(PostgresReplyRepository::new(
        pool.clone(),
        id_generator.clone(),
    ));
    let user_repository: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(
        pool.clone(),
        id_generator.clone(),
    ));
    let authentication_repository: Arc<dyn AuthenticationRepository> =
        Arc::new(PostgresAuthenticationRepository::new(pool.clone()));

    let user_handlers = UserHandlers::new(Arc::new(RegisterUserUseCase::new(
        user_repository.clone(),
        password_hasher.clone(),
    )));

    let authentication_handlers = AuthenticationHandlers::new(
        Arc::new(LoginUserUseCase::new(
            user_repository.clone(),
            authentication_repository.clone(),
            token_manager.clone(),
            password_hasher.clone(),
        )),
        Arc::new(RefreshAuthenticationUseCase::new(
            authentication_repository.clone(),
            token_manager.clone(),
        )),
        Arc::new(LogoutUserUseCase::new(authentication_repository.clone())),
    );

    let thread_handlers = ThreadHandlers::new(
        Arc::new(AddThreadUseCase::new(thread_repository.clone())),
        Arc::new(GetThreadUseCase::new(
            thread_repository.clone(),
            comment_repository.clone(),
            reply_repository.clone(),
        )),
        Arc::new(AddCommentUseCase::new(
            comment_repository.clone(),
            thread_repository.clone(),
        )),
        Arc::new(DeleteCommentUseCase::new(
            comment_repository.clone(),
            thread_repository.clone(),
        )),
        Arc::new(AddReplyUseCase::new(
            reply_repository.clone(),
            comment_repository.clone(),
            thread_repository.clone(),
        )),
        Arc::new(DeleteReplyUseCase::new(
            reply_repository,
            comment_repository,
            thread_repository,
        )),
    );

    let router = app_router(
        user_handlers,
        authentication_handlers,
        thread_handlers,
        token_manager,
    );

    let addr = config
        .server
        .socket_addr()
        .expect("Invalid server address");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!(%addr, "forum-api listening");

    axum::serve(listener, router)
        .await
        .expect("Server terminated unexpectedly");
}
