//! PostgreSQL Repository Implementations

use kernel::id::UserId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entities::PushToken;
use crate::domain::repository::{PushTransaction, PushUnitOfWork};
use crate::error::{PushError, PushResult};

/// PostgreSQL-backed push token repository
#[derive(Clone)]
pub struct PgPushRepository {
    pool: PgPool,
}

impl PgPushRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Open PostgreSQL transaction; rolled back on drop unless committed
pub struct PgPushTransaction {
    tx: Transaction<'static, Postgres>,
}

impl PushUnitOfWork for PgPushRepository {
    type Tx = PgPushTransaction;

    async fn begin(&self) -> PushResult<PgPushTransaction> {
        let tx = self.pool.begin().await?;
        Ok(PgPushTransaction { tx })
    }
}

impl PushTransaction for PgPushTransaction {
    async fn delete_user_token(&mut self, user_id: &UserId, token: &str) -> PushResult<u64> {
        let deleted = sqlx::query("DELETE FROM push_tokens WHERE user_id = $1 AND token = $2")
            .bind(user_id.as_uuid())
            .bind(token)
            .execute(&mut *self.tx)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn token_exists(&mut self, token: &str) -> PushResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM push_tokens WHERE token = $1)")
                .bind(token)
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(exists)
    }

    async fn insert(&mut self, token: &PushToken) -> PushResult<()> {
        sqlx::query(
            r#"
            INSERT INTO push_tokens (
                push_token_id,
                token,
                provider,
                user_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(token.push_token_id.as_uuid())
        .bind(&token.token)
        .bind(token.provider.code())
        .bind(token.user_id.as_uuid())
        .bind(token.created_at)
        .bind(token.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent registration of the same token
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return PushError::TokenConflict;
                }
            }
            PushError::Database(e)
        })?;

        Ok(())
    }

    async fn commit(self) -> PushResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
