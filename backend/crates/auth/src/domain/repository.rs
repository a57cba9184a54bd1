//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Reads that need no atomicity go through [`UserRepository`] and
//! [`AccessTokenRepository`]. Every write runs inside an [`AuthTransaction`]
//! obtained from [`AuthUnitOfWork::begin`]; dropping a transaction without
//! calling `commit` rolls it back.

use std::future::Future;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::{access_token::AccessToken, refresh_token::RefreshToken, user::User};
use crate::domain::value_object::{token_value::TokenValue, username::Username};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by normalized username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>>;
}

/// Access token lookups used by the authentication middleware
#[trait_variant::make(AccessTokenRepository: Send)]
pub trait LocalAccessTokenRepository {
    /// Find an access token by exact value that is still valid at `now`
    async fn find_valid(
        &self,
        token: &TokenValue,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<AccessToken>>;

    /// Delete every expired access and refresh token; returns rows removed
    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}

/// Operations available inside one database transaction
pub trait AuthTransaction: Send {
    fn find_user(
        &mut self,
        user_id: &UserId,
    ) -> impl Future<Output = AuthResult<Option<User>>> + Send;

    fn touch_last_authenticated(
        &mut self,
        user_id: &UserId,
        at: DateTime<Utc>,
    ) -> impl Future<Output = AuthResult<()>> + Send;

    fn insert_access_token(
        &mut self,
        token: &AccessToken,
    ) -> impl Future<Output = AuthResult<()>> + Send;

    /// Returns the number of rows removed; zero is not an error
    fn delete_access_token(
        &mut self,
        token: &TokenValue,
    ) -> impl Future<Output = AuthResult<u64>> + Send;

    fn insert_refresh_token(
        &mut self,
        token: &RefreshToken,
    ) -> impl Future<Output = AuthResult<()>> + Send;

    /// Find a refresh token by exact value regardless of expiry
    fn find_refresh_token(
        &mut self,
        token: &TokenValue,
    ) -> impl Future<Output = AuthResult<Option<RefreshToken>>> + Send;

    /// Returns the number of rows removed; zero is not an error
    fn delete_refresh_token(
        &mut self,
        token: &TokenValue,
    ) -> impl Future<Output = AuthResult<u64>> + Send;

    /// Persist every change made through this transaction
    fn commit(self) -> impl Future<Output = AuthResult<()>> + Send;
}

/// Source of auth transactions
pub trait AuthUnitOfWork: Send + Sync {
    type Tx: AuthTransaction;

    fn begin(&self) -> impl Future<Output = AuthResult<Self::Tx>> + Send;
}
