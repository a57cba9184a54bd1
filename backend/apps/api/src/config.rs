//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded by `dotenvy`).

use std::env;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Context;
use auth::AuthConfig;
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_MAX_CONNECTIONS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Server configuration
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: NonZeroU32,
    /// CORS allow-list
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
    /// `(username, password)` of a user to create at startup
    pub seed_user: Option<(String, String)>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<NonZeroU32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().with_context(|| {
                    format!("FRONTEND_ORIGINS entry {:?} is not a valid origin", origin)
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let defaults = AuthConfig::default();
        let access_token_ttl =
            secs_or(&lookup, "ACCESS_TOKEN_TTL_SECS", defaults.access_token_ttl)?;
        let refresh_token_ttl =
            secs_or(&lookup, "REFRESH_TOKEN_TTL_SECS", defaults.refresh_token_ttl)?;

        let password_pepper = lookup("PASSWORD_PEPPER")
            .map(|b64| platform::crypto::from_base64(b64.trim()))
            .transpose()
            .context("PASSWORD_PEPPER must be base64")?;

        let seed_user = match (lookup("SEED_USERNAME"), lookup("SEED_PASSWORD")) {
            (Some(username), Some(password)) => Some((username, password)),
            (None, None) => None,
            _ => anyhow::bail!("SEED_USERNAME and SEED_PASSWORD must be set together"),
        };

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            frontend_origins,
            auth: AuthConfig {
                access_token_ttl,
                refresh_token_ttl,
                password_pepper,
            },
            seed_user,
        })
    }
}

fn secs_or<F>(lookup: &F, key: &str, default: Duration) -> anyhow::Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => {
            let secs = v
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of seconds", key))?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/app")]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:31113".parse().unwrap());
        assert_eq!(config.database_max_connections.get(), 5);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.auth.access_token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.auth.refresh_token_ttl, Duration::from_secs(2_592_000));
        assert!(config.auth.password_pepper.is_none());
        assert!(config.seed_user.is_none());
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(config(&[]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("FRONTEND_ORIGINS", "https://app.example.com, "),
            ("ACCESS_TOKEN_TTL_SECS", "60"),
            ("PASSWORD_PEPPER", "cGVwcGVy"),
            ("SEED_USERNAME", "admin@example.com"),
            ("SEED_PASSWORD", "correct horse battery"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_max_connections.get(), 12);
        assert_eq!(config.frontend_origins, vec!["https://app.example.com"]);
        assert_eq!(config.auth.access_token_ttl_secs(), 60);
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(
            config.seed_user,
            Some((
                "admin@example.com".to_string(),
                "correct horse battery".to_string()
            ))
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/app"),
                ("ACCESS_TOKEN_TTL_SECS", "soon"),
            ])
            .is_err()
        );
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/app"),
                ("PASSWORD_PEPPER", "***"),
            ])
            .is_err()
        );
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/app"),
                ("SEED_USERNAME", "admin@example.com"),
            ])
            .is_err()
        );
    }

    #[test]
    fn test_zero_max_connections_is_an_error() {
        let err = config(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
    }

    #[test]
    fn test_malformed_origin_is_an_error() {
        let err = config(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("FRONTEND_ORIGINS", "https://app.example.com,https://bad\u{7f}.example.com"),
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("FRONTEND_ORIGINS"));
    }
}
