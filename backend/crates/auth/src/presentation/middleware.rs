//! Auth Middleware
//!
//! Middleware for requiring bearer authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthError;

pub use crate::application::AuthContext;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> AuthMiddlewareState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Middleware that requires a valid bearer access token
///
/// On success the resolved [`AuthContext`] is inserted into the request
/// extensions. Rejections never touch the database beyond the lookup.
pub async fn require_bearer_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer_token(req.headers()) else {
        return Err(AuthError::MissingCredentials.into_response());
    };

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.repo.clone());
    let context = use_case
        .execute(&token)
        .await
        .map_err(IntoResponse::into_response)?;

    tracing::debug!(user_id = %context.user.user_id, "Request authenticated");

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}
