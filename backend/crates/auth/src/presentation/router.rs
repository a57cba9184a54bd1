//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccessTokenRepository, AuthUnitOfWork, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_bearer_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// `/logout` and `/userinfo` sit behind [`require_bearer_auth`].
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + AccessTokenRepository + AuthUnitOfWork + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let state = AuthAppState {
        repo: repo.clone(),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/logout", post(handlers::logout::<R>))
        .route("/userinfo", get(handlers::user_info))
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState::new(repo),
            require_bearer_auth::<R>,
        ));

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .merge(protected)
        .with_state(state)
}
