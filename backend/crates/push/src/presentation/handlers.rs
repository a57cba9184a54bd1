//! HTTP Handlers

use auth::AuthContext;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use platform::validation::ValidatedJson;
use std::sync::Arc;

use crate::application::{UpdatePushTokenInput, UpdatePushTokenUseCase};
use crate::domain::repository::PushUnitOfWork;
use crate::error::PushResult;
use crate::presentation::dto::UpdatePushTokenRequest;

/// Shared state for push handlers
#[derive(Clone)]
pub struct PushAppState<R>
where
    R: PushUnitOfWork + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// PUT /api/v1/push/token
pub async fn update_token<R>(
    State(state): State<PushAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    ValidatedJson(req): ValidatedJson<UpdatePushTokenRequest>,
) -> PushResult<StatusCode>
where
    R: PushUnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePushTokenUseCase::new(state.repo.clone());

    let input = UpdatePushTokenInput {
        user_id: ctx.user.user_id,
        new_token: req.new_token.unwrap_or_default(),
        old_token: req.old_token,
        provider: req.provider.unwrap_or_default(),
    };

    use_case.execute(input).await?;

    Ok(StatusCode::NO_CONTENT)
}
