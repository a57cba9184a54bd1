//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access token lifetime (1 day)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (30 days)
    pub refresh_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::from_secs(24 * 3600),
            refresh_token_ttl: Duration::from_secs(30 * 24 * 3600),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config for development (short-lived access tokens)
    pub fn development() -> Self {
        Self {
            access_token_ttl: Duration::from_secs(3600),
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Access token lifetime in whole seconds, as reported to clients
    pub fn access_token_ttl_secs(&self) -> i64 {
        i64::try_from(self.access_token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    pub fn access_token_valid_until(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        expiry(now, self.access_token_ttl)
    }

    pub fn refresh_token_valid_until(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        expiry(now, self.refresh_token_ttl)
    }
}

fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(ttl)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl_secs(), 86_400);
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(2_592_000));
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_valid_until() {
        let config = AuthConfig::default();
        let now = Utc::now();
        assert_eq!(
            config.access_token_valid_until(now) - now,
            TimeDelta::seconds(86_400)
        );
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let config = AuthConfig {
            access_token_ttl: Duration::MAX,
            ..Default::default()
        };
        assert_eq!(
            config.access_token_valid_until(Utc::now()),
            DateTime::<Utc>::MAX_UTC
        );
    }
}
