//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{PushTokenId, UserId};

use crate::domain::value_objects::PushProvider;

/// Device push token registered by a user
#[derive(Debug, Clone)]
pub struct PushToken {
    pub push_token_id: PushTokenId,
    /// Provider-issued device token; unique across all users
    pub token: String,
    pub provider: PushProvider,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PushToken {
    pub fn new(token: String, provider: PushProvider, user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            push_token_id: PushTokenId::new(),
            token,
            provider,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
