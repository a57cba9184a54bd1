//! Refresh Use Case
//!
//! Exchanges a refresh token for a new token pair. The consumed refresh token
//! is deleted in the same transaction, so each value works once.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::tokens::{TokenPairOutput, issue_token_pair};
use crate::domain::repository::{AuthTransaction, AuthUnitOfWork};
use crate::domain::value_object::token_value::TokenValue;
use crate::error::{AuthError, AuthResult};

/// Refresh use case
pub struct RefreshUseCase<W>
where
    W: AuthUnitOfWork,
{
    uow: Arc<W>,
    config: Arc<AuthConfig>,
}

impl<W> RefreshUseCase<W>
where
    W: AuthUnitOfWork,
{
    pub fn new(uow: Arc<W>, config: Arc<AuthConfig>) -> Self {
        Self { uow, config }
    }

    pub async fn execute(&self, refresh_token: String) -> AuthResult<TokenPairOutput> {
        let value = TokenValue::from_raw(refresh_token);
        let now = Utc::now();

        let mut tx = self.uow.begin().await?;

        let Some(refresh) = tx.find_refresh_token(&value).await? else {
            return Err(AuthError::TokenInvalid);
        };

        if refresh.is_expired(now) {
            tx.delete_refresh_token(&refresh.token).await?;
            tx.commit().await?;
            tracing::debug!(token = refresh.token.log_prefix(), "Expired refresh token removed");
            return Err(AuthError::TokenInvalid);
        }

        let user = tx
            .find_user(&refresh.user_id)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if !user.is_active {
            return Err(AuthError::UserDeactivated);
        }

        // A concurrent refresh with the same value already consumed it
        if tx.delete_refresh_token(&refresh.token).await? == 0 {
            return Err(AuthError::TokenInvalid);
        }

        let tokens = issue_token_pair(&mut tx, user.user_id, &self.config, now).await?;
        tx.commit().await?;

        tracing::info!(user_id = %user.user_id, "Token pair refreshed");

        Ok(tokens)
    }
}
