use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission scope granted to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserScope {
    /// Regular app access
    #[default]
    App,
    /// Content management access
    Cms,
}

impl UserScope {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserScope::App => "app",
            UserScope::Cms => "cms",
        }
    }

    /// Parse a stored scope code; unknown codes yield `None`
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "app" => Some(UserScope::App),
            "cms" => Some(UserScope::Cms),
            _ => None,
        }
    }
}

impl fmt::Display for UserScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scope_from_code() {
        assert_eq!(UserScope::from_code("app"), Some(UserScope::App));
        assert_eq!(UserScope::from_code("cms"), Some(UserScope::Cms));
        assert_eq!(UserScope::from_code("root"), None);
    }

    #[test]
    fn test_user_scope_display() {
        assert_eq!(UserScope::App.to_string(), "app");
        assert_eq!(UserScope::Cms.to_string(), "cms");
    }
}
