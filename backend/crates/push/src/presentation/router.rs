//! Push Router

use auth::PgAuthRepository;
use auth::middleware::{AuthMiddlewareState, require_bearer_auth};
use auth::store::{AccessTokenRepository, UserRepository};
use axum::{Router, middleware, routing::put};
use std::sync::Arc;

use crate::domain::repository::PushUnitOfWork;
use crate::infra::postgres::PgPushRepository;
use crate::presentation::handlers::{self, PushAppState};

/// Create the Push router with PostgreSQL repositories
pub fn push_router(repo: PgPushRepository, auth_repo: PgAuthRepository) -> Router {
    push_router_generic(repo, auth_repo)
}

/// Create a generic Push router; every route requires a bearer token
/// resolved through `auth_repo`
pub fn push_router_generic<R, A>(repo: R, auth_repo: A) -> Router
where
    R: PushUnitOfWork + Clone + Send + Sync + 'static,
    A: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let state = PushAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/token", put(handlers::update_token::<R>))
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState::new(Arc::new(auth_repo)),
            require_bearer_auth::<A>,
        ))
        .with_state(state)
}
