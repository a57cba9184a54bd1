//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, refresh_token::RefreshToken, user::User};
use crate::domain::repository::{
    AccessTokenRepository, AuthTransaction, AuthUnitOfWork, UserRepository,
};
use crate::domain::value_object::{
    token_value::TokenValue, user_scope::UserScope, username::Username,
};
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

const USER_COLUMNS: &str = r#"
    user_id,
    username,
    password_hash,
    is_active,
    scopes,
    last_authenticated_at,
    created_at,
    updated_at
"#;

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                password_hash,
                is_active,
                scopes,
                last_authenticated_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.password_hash.as_ref().map(|h| h.as_phc_string()))
        .bind(user.is_active)
        .bind(user.scope_codes())
        .bind(user.last_authenticated_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE user_id = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRow::into_user))
    }
}

// ============================================================================
// Access Token Repository Implementation
// ============================================================================

impl AccessTokenRepository for PgAuthRepository {
    async fn find_valid(
        &self,
        token: &TokenValue,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<AccessToken>> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT token, user_id, created_at, valid_until
            FROM access_tokens
            WHERE token = $1 AND valid_until > $2
            "#,
        )
        .bind(token.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TokenRow::into_access_token))
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let access = sqlx::query("DELETE FROM access_tokens WHERE valid_until <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?
            .rows_affected();

        let refresh = sqlx::query("DELETE FROM refresh_tokens WHERE valid_until <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(
            access_tokens_deleted = access,
            refresh_tokens_deleted = refresh,
            "Cleaned up expired tokens"
        );

        Ok(access + refresh)
    }
}

// ============================================================================
// Unit of Work
// ============================================================================

/// Open PostgreSQL transaction; rolled back on drop unless committed
pub struct PgAuthTransaction {
    tx: Transaction<'static, Postgres>,
}

impl AuthUnitOfWork for PgAuthRepository {
    type Tx = PgAuthTransaction;

    async fn begin(&self) -> AuthResult<PgAuthTransaction> {
        let tx = self.pool.begin().await?;
        Ok(PgAuthTransaction { tx })
    }
}

impl AuthTransaction for PgAuthTransaction {
    async fn find_user(&mut self, user_id: &UserId) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE user_id = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn touch_last_authenticated(
        &mut self,
        user_id: &UserId,
        at: DateTime<Utc>,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET last_authenticated_at = $2, updated_at = $2
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(at)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn insert_access_token(&mut self, token: &AccessToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (token, user_id, created_at, valid_until)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.token.as_str())
        .bind(token.user_id.as_uuid())
        .bind(token.created_at)
        .bind(token.valid_until)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn delete_access_token(&mut self, token: &TokenValue) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM access_tokens WHERE token = $1")
            .bind(token.as_str())
            .execute(&mut *self.tx)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, created_at, valid_until)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.token.as_str())
        .bind(token.user_id.as_uuid())
        .bind(token.created_at)
        .bind(token.valid_until)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn find_refresh_token(&mut self, token: &TokenValue) -> AuthResult<Option<RefreshToken>> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT token, user_id, created_at, valid_until
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(row.map(TokenRow::into_refresh_token))
    }

    async fn delete_refresh_token(&mut self, token: &TokenValue) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM refresh_tokens WHERE token = $1")
            .bind(token.as_str())
            .execute(&mut *self.tx)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn commit(self) -> AuthResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    password_hash: Option<String>,
    is_active: bool,
    scopes: Vec<String>,
    last_authenticated_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        let user_id = UserId::from_uuid(self.user_id);

        // An unparseable hash locks the user out of password login
        let password_hash = self.password_hash.and_then(|phc| {
            HashedPassword::from_phc_string(phc)
                .inspect_err(|_| {
                    tracing::warn!(user_id = %user_id, "Stored password hash is not a PHC string");
                })
                .ok()
        });

        let scopes = self
            .scopes
            .iter()
            .filter_map(|code| {
                let scope = UserScope::from_code(code);
                if scope.is_none() {
                    tracing::warn!(user_id = %user_id, scope = %code, "Unknown user scope ignored");
                }
                scope
            })
            .collect();

        User {
            user_id,
            username: Username::from_db(self.username),
            password_hash,
            is_active: self.is_active,
            scopes,
            last_authenticated_at: self.last_authenticated_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    token: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    valid_until: DateTime<Utc>,
}

impl TokenRow {
    fn into_access_token(self) -> AccessToken {
        AccessToken {
            token: TokenValue::from_raw(self.token),
            user_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
            valid_until: self.valid_until,
        }
    }

    fn into_refresh_token(self) -> RefreshToken {
        RefreshToken {
            token: TokenValue::from_raw(self.token),
            user_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
            valid_until: self.valid_until,
        }
    }
}
