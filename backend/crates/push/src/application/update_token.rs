//! Update Push Token Use Case
//!
//! Replaces a device's push token for the calling user: the old token (if
//! any) is removed and the new one registered in one transaction.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::PushToken;
use crate::domain::repository::{PushTransaction, PushUnitOfWork};
use crate::domain::value_objects::PushProvider;
use crate::error::{PushError, PushResult};

/// Update push token input
pub struct UpdatePushTokenInput {
    pub user_id: UserId,
    pub new_token: String,
    pub old_token: Option<String>,
    pub provider: String,
}

/// Update push token use case
pub struct UpdatePushTokenUseCase<W>
where
    W: PushUnitOfWork,
{
    uow: Arc<W>,
}

impl<W> UpdatePushTokenUseCase<W>
where
    W: PushUnitOfWork,
{
    pub fn new(uow: Arc<W>) -> Self {
        Self { uow }
    }

    pub async fn execute(&self, input: UpdatePushTokenInput) -> PushResult<()> {
        let provider = PushProvider::from_code(&input.provider)
            .ok_or_else(|| PushError::UnknownProvider(input.provider.clone()))?;

        let mut tx = self.uow.begin().await?;

        if let Some(old) = input.old_token.as_deref().filter(|t| !t.is_empty()) {
            let removed = tx.delete_user_token(&input.user_id, old).await?;
            if removed == 0 {
                tracing::debug!(user_id = %input.user_id, "Old push token not registered");
            }
        }

        if tx.token_exists(&input.new_token).await? {
            return Err(PushError::TokenConflict);
        }

        let token = PushToken::new(input.new_token, provider, input.user_id);
        tx.insert(&token).await?;
        tx.commit().await?;

        tracing::info!(
            user_id = %token.user_id,
            push_token_id = %token.push_token_id,
            provider = %provider,
            "Push token registered"
        );

        Ok(())
    }
}
