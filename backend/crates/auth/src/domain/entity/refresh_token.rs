//! Refresh Token Entity
//!
//! Single-use credential exchanged for a new token pair.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::token_value::TokenValue;

#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub token: TokenValue,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl RefreshToken {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let token = RefreshToken::issue(UserId::new(), now, now + TimeDelta::seconds(10));

        assert!(!token.is_expired(now));
        assert!(token.is_expired(now + TimeDelta::seconds(10)));
        assert!(token.is_expired(now + TimeDelta::seconds(11)));
    }
}
