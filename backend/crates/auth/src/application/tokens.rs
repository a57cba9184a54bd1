//! Token Pair Issuance
//!
//! Shared by login and refresh: both hand out a new access token and a new
//! refresh token inside the caller's transaction.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::{access_token::AccessToken, refresh_token::RefreshToken};
use crate::domain::repository::AuthTransaction;
use crate::error::AuthResult;

/// Newly issued credentials returned to the client
#[derive(Debug, Clone)]
pub struct TokenPairOutput {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

pub(crate) async fn issue_token_pair<T>(
    tx: &mut T,
    user_id: UserId,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> AuthResult<TokenPairOutput>
where
    T: AuthTransaction,
{
    let access = AccessToken::issue(user_id, now, config.access_token_valid_until(now));
    let refresh = RefreshToken::issue(user_id, now, config.refresh_token_valid_until(now));

    tx.insert_access_token(&access).await?;
    tx.insert_refresh_token(&refresh).await?;

    Ok(TokenPairOutput {
        access_token: access.token.into_string(),
        refresh_token: refresh.token.into_string(),
        expires_in: config.access_token_ttl_secs(),
    })
}
