//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are rendered by
//! the `auth` and `push` error types.

mod config;
mod health;

use std::sync::Arc;

use auth::application::SeedUserUseCase;
use auth::store::AccessTokenRepository;
use auth::{PgAuthRepository, auth_router};
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    http::{Method, header},
};
use push::{PgPushRepository, push_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// Largest accepted request body
const BODY_LIMIT_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "starter_api=info,auth=info,push=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections.get())
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_repo = PgAuthRepository::new(pool.clone());

    // Startup cleanup: remove expired tokens
    // Errors here should not prevent server startup
    match auth_repo.cleanup_expired(chrono::Utc::now()).await {
        Ok(deleted) => {
            tracing::info!(tokens_deleted = deleted, "Token cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Token cleanup failed, continuing anyway");
        }
    }

    let auth_config = config.auth.clone();

    if let Some((username, password)) = config.seed_user {
        SeedUserUseCase::new(Arc::new(auth_repo.clone()), Arc::new(auth_config.clone()))
            .execute(&username, password)
            .await?;
    }

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/v1/auth", auth_router(auth_repo.clone(), auth_config))
        .nest(
            "/api/v1/push",
            push_router(PgPushRepository::new(pool.clone()), auth_repo),
        )
        .merge(health::health_router(pool))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
