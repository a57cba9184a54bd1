//! Token Value Object
//!
//! Opaque bearer credential value shared by access and refresh tokens. The
//! value itself is the lookup key; it is compared by exact string match.

use std::fmt;

use platform::crypto::{OPAQUE_TOKEN_BYTES, random_token};

/// Opaque token value
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenValue(String);

impl TokenValue {
    /// Fresh random token from the OS RNG
    pub fn generate() -> Self {
        Self(random_token(OPAQUE_TOKEN_BYTES))
    }

    /// Wrap a value received from a client or read from the database
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Short prefix that is safe to put in logs
    pub fn log_prefix(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(6)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenValue({}…)", self.log_prefix())
    }
}
