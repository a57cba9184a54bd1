//! Login Use Case
//!
//! Verifies a username/password pair and issues a token pair.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::tokens::{TokenPairOutput, issue_token_pair};
use crate::domain::repository::{AuthTransaction, AuthUnitOfWork, UserRepository};
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U, W>
where
    U: UserRepository,
    W: AuthUnitOfWork,
{
    user_repo: Arc<U>,
    uow: Arc<W>,
    config: Arc<AuthConfig>,
}

impl<U, W> LoginUseCase<U, W>
where
    U: UserRepository,
    W: AuthUnitOfWork,
{
    pub fn new(user_repo: Arc<U>, uow: Arc<W>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            uow,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<TokenPairOutput> {
        let username =
            Username::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(password_hash) = user.password_hash.as_ref() else {
            return Err(AuthError::NotLocalUser);
        };

        if !user.is_active {
            return Err(AuthError::UserDeactivated);
        }

        let password = ClearTextPassword::for_verification(input.password);
        if !password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        let mut tx = self.uow.begin().await?;
        let tokens = issue_token_pair(&mut tx, user.user_id, &self.config, now).await?;
        tx.touch_last_authenticated(&user.user_id, now).await?;
        tx.commit().await?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(tokens)
    }
}
