//! Repository Traits
//!
//! Push token writes run inside a [`PushTransaction`]; dropping it without
//! `commit` rolls back.

use std::future::Future;

use kernel::id::UserId;

use crate::domain::entities::PushToken;
use crate::error::PushResult;

/// Operations available inside one database transaction
pub trait PushTransaction: Send {
    /// Delete `token` if it belongs to `user_id`; returns rows removed
    fn delete_user_token(
        &mut self,
        user_id: &UserId,
        token: &str,
    ) -> impl Future<Output = PushResult<u64>> + Send;

    /// Whether `token` is registered by any user
    fn token_exists(&mut self, token: &str) -> impl Future<Output = PushResult<bool>> + Send;

    /// Insert a new token; a duplicate value yields `PushError::TokenConflict`
    fn insert(&mut self, token: &PushToken) -> impl Future<Output = PushResult<()>> + Send;

    fn commit(self) -> impl Future<Output = PushResult<()>> + Send;
}

/// Source of push transactions
pub trait PushUnitOfWork: Send + Sync {
    type Tx: PushTransaction;

    fn begin(&self) -> impl Future<Output = PushResult<Self::Tx>> + Send;
}
