//! Authenticate Use Case
//!
//! Resolves a bearer token into the access token record and its owner.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::token_value::TokenValue;
use crate::error::{AuthError, AuthResult};

/// Authenticated caller, placed in request extensions by the middleware
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub access_token: AccessToken,
    pub user: User,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U, A>
where
    U: UserRepository,
    A: AccessTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<A>,
}

impl<U, A> AuthenticateUseCase<U, A>
where
    U: UserRepository,
    A: AccessTokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<A>) -> Self {
        Self {
            user_repo,
            token_repo,
        }
    }

    pub async fn execute(&self, raw_token: &str) -> AuthResult<AuthContext> {
        let value = TokenValue::from_raw(raw_token);

        let access_token = self
            .token_repo
            .find_valid(&value, Utc::now())
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        let user = self
            .user_repo
            .find_by_id(&access_token.user_id)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if !user.is_active {
            return Err(AuthError::UserDeactivated);
        }

        Ok(AuthContext { access_token, user })
    }
}
