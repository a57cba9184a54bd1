//! Username Value Object
//!
//! Local users log in with their e-mail address as username. Stored trimmed
//! and lower-cased so lookups are case-insensitive.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::ValidateEmail;

/// Maximum username length, matching the login DTO rule
pub const USERNAME_MAX_LENGTH: usize = 255;

/// Normalized username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Normalize and check a username supplied by a client
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let username = raw.as_ref().trim().to_lowercase();

        if username.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        // Same rule as the `email` check on the login DTO
        if !username.validate_email() {
            return Err(AppError::bad_request("Username must be an e-mail address"));
        }

        Ok(Self(username))
    }

    /// Wrap a value read from the database (already normalized)
    pub fn from_db(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Username::new(s)
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
