//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use platform::validation::{ValidatedJson, ValidatedJsonOrDefault};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthContext, LoginInput, LoginUseCase, LogoutUseCase, RefreshUseCase,
};
use crate::domain::repository::{AccessTokenRepository, AuthUnitOfWork, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LogoutRequest, RefreshRequest, TokenResponse, UserInfoResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AccessTokenRepository + AuthUnitOfWork + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + AccessTokenRepository + AuthUnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        username: req.username.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = use_case.execute(input).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/v1/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + AccessTokenRepository + AuthUnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(req.refresh_token.unwrap_or_default())
        .await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Logout (requires authentication)
// ============================================================================

/// POST /api/v1/auth/logout
///
/// The body is optional; an empty request logs out the access token only.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    ValidatedJsonOrDefault(req): ValidatedJsonOrDefault<LogoutRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + AccessTokenRepository + AuthUnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());

    use_case
        .execute(&ctx.access_token.token, req.refresh_token.as_deref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// User Info (requires authentication)
// ============================================================================

/// GET /api/v1/auth/userinfo
pub async fn user_info(Extension(ctx): Extension<AuthContext>) -> Json<UserInfoResponse> {
    Json(UserInfoResponse::from(&ctx.user))
}
