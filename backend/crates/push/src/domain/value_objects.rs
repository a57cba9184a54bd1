//! Domain Value Objects

use std::fmt;

/// Push delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushProvider {
    /// Firebase Cloud Messaging
    Fcm,
}

impl PushProvider {
    pub const fn code(&self) -> &'static str {
        match self {
            PushProvider::Fcm => "fcm",
        }
    }

    /// Parse a provider name as sent by clients or stored in the database
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fcm" => Some(PushProvider::Fcm),
            _ => None,
        }
    }
}

impl fmt::Display for PushProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
