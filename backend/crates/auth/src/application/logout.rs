//! Logout Use Case
//!
//! Invalidates the caller's access token and, optionally, one refresh token.
//! Both deletions run in a single transaction: either both are persisted or
//! neither is.

use std::sync::Arc;

use crate::domain::repository::{AuthTransaction, AuthUnitOfWork};
use crate::domain::value_object::token_value::TokenValue;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<W>
where
    W: AuthUnitOfWork,
{
    uow: Arc<W>,
}

impl<W> LogoutUseCase<W>
where
    W: AuthUnitOfWork,
{
    pub fn new(uow: Arc<W>) -> Self {
        Self { uow }
    }

    /// Delete `access_token` and, when given and non-empty, `refresh_token`
    ///
    /// A refresh token that does not exist is ignored. An access token that
    /// is already gone (concurrent logout) counts as success.
    pub async fn execute(
        &self,
        access_token: &TokenValue,
        refresh_token: Option<&str>,
    ) -> AuthResult<()> {
        let mut tx = self.uow.begin().await?;

        let deleted = tx.delete_access_token(access_token).await?;
        if deleted == 0 {
            tracing::debug!(
                token = access_token.log_prefix(),
                "Access token already removed"
            );
        }

        if let Some(raw) = refresh_token.filter(|t| !t.is_empty()) {
            let value = TokenValue::from_raw(raw);
            match tx.find_refresh_token(&value).await? {
                Some(found) => {
                    tx.delete_refresh_token(&found.token).await?;
                }
                None => {
                    tracing::debug!(token = value.log_prefix(), "Refresh token not found");
                }
            }
        }

        tx.commit().await?;

        tracing::info!(token = access_token.log_prefix(), "User logged out");

        Ok(())
    }
}
