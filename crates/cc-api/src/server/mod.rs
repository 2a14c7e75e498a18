//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use cc_cache::{RedisLiveNotifier, RedisPool};
use cc_common::{AppConfig, AppError, JwtService};
use cc_db::{
    create_pool, default_migrations_dir, run_migrations, PgAvailabilityRepository,
    PgCommentRepository, PgIdeaRepository, PgMembershipRepository, PgNotificationRepository,
    PgPool, PgProfileRepository, PgSkillRepository, PgUserRepository, PoolSettings,
};
use cc_service::{create_mailer, FileImageStore, ServiceContext, ServiceContextBuilder, ServiceSettings};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
///
/// Health probes and uploaded media bypass rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    // Data-URL images are base64, a third larger than the file itself
    let body_limit = DefaultBodyLimit::max(config.storage.max_file_size_bytes().saturating_mul(2));
    let api = apply_middleware_with_config(
        create_router().layer(body_limit),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    Router::new()
        .merge(api)
        .merge(health_routes())
        .nest_service("/media", ServeDir::new(&config.storage.upload_dir))
        .with_state(state)
}

/// Wire the PostgreSQL repositories, Redis notifier, mailer and image store
/// into a service context
pub fn build_service_context(
    config: &AppConfig,
    pool: &PgPool,
    redis_pool: &RedisPool,
) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .profile_repo(Arc::new(PgProfileRepository::new(pool.clone())))
        .skill_repo(Arc::new(PgSkillRepository::new(pool.clone())))
        .availability_repo(Arc::new(PgAvailabilityRepository::new(pool.clone())))
        .membership_repo(Arc::new(PgMembershipRepository::new(pool.clone())))
        .idea_repo(Arc::new(PgIdeaRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool.clone())))
        .live_notifier(Arc::new(RedisLiveNotifier::new(redis_pool.clone())))
        .mailer(create_mailer(&config.mail))
        .image_store(Arc::new(FileImageStore::from_config(&config.storage)))
        .jwt_service(jwt_service)
        .settings(ServiceSettings::from_config(config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolSettings::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool, &default_migrations_dir())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis pool created");

    let service_context = build_service_context(&config, &pool, &redis_pool)?;

    Ok(AppState::new(service_context, config, pool, redis_pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = format!("{}:{}", config.api.host, config.api.port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
