//! Seed User Use Case
//!
//! Creates a local user at startup when one is configured and missing.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_scope::UserScope, username::Username};
use crate::error::{AuthError, AuthResult};

pub struct SeedUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SeedUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Returns `true` when the user was created, `false` when it existed
    pub async fn execute(&self, username: &str, password: String) -> AuthResult<bool> {
        let username = Username::new(username)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            tracing::debug!(username = %username, "Seed user already exists");
            return Ok(false);
        }

        let password = ClearTextPassword::new(password)
            .map_err(|e| AuthError::Internal(format!("Seed password rejected: {}", e)))?;
        let hash = password.hash(self.config.pepper())?;

        let user = User::new_local(username, hash, vec![UserScope::App]);
        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, username = %user.username, "Seed user created");

        Ok(true)
    }
}
