//! Access Token Entity
//!
//! Bearer credential presented on every authenticated request. Deleting the
//! row invalidates the session immediately.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::token_value::TokenValue;

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: TokenValue,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl AccessToken {
    /// Issue a fresh token for `user_id`
    pub fn issue(user_id: UserId, now: DateTime<Utc>, valid_until: DateTime<Utc>) -> Self {
        Self {
            token: TokenValue::generate(),
            user_id,
            created_at: now,
            valid_until,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.valid_until <= now
    }
}
