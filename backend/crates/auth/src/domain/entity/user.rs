//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{user_scope::UserScope, username::Username};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Lower-cased e-mail address used to log in
    pub username: Username,
    /// `None` for users without a local password
    pub password_hash: Option<HashedPassword>,
    pub is_active: bool,
    pub scopes: Vec<UserScope>,
    pub last_authenticated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create an active local user
    pub fn new_local(
        username: Username,
        password_hash: HashedPassword,
        scopes: Vec<UserScope>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            password_hash: Some(password_hash),
            is_active: true,
            scopes,
            last_authenticated_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the user may authenticate with a password
    pub fn is_local(&self) -> bool {
        self.password_hash.is_some()
    }

    pub fn scope_codes(&self) -> Vec<String> {
        self.scopes.iter().map(|s| s.code().to_string()).collect()
    }
}
