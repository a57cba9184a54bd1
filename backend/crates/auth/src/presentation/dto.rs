//! API DTOs (Data Transfer Objects)
//!
//! Request fields are `Option` so that a missing field surfaces as a
//! `required` violation alongside every other failing rule instead of a
//! deserialization error.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::TokenPairOutput;
use crate::domain::entity::user::User;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(required, email, length(max = 255))]
    pub username: Option<String>,
    #[validate(required, length(max = 500))]
    pub password: Option<String>,
}

// ============================================================================
// Refresh
// ============================================================================

/// Refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(required, length(max = 500))]
    pub refresh_token: Option<String>,
}

// ============================================================================
// Logout
// ============================================================================

/// Logout request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    /// Refresh token to revoke alongside the access token
    #[validate(length(max = 500))]
    pub refresh_token: Option<String>,
}

// ============================================================================
// Token Response
// ============================================================================

/// Issued token pair (login and refresh)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `bearer`
    pub token_type: &'static str,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl From<TokenPairOutput> for TokenResponse {
    fn from(output: TokenPairOutput) -> Self {
        Self {
            access_token: output.access_token,
            refresh_token: output.refresh_token,
            token_type: "bearer",
            expires_in: output.expires_in,
        }
    }
}

// ============================================================================
// User Info (for authenticated users)
// ============================================================================

/// Current user info response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub sub: String,
    pub email: String,
    pub scopes: Vec<String>,
    /// Unix seconds
    pub updated_at: i64,
    /// Unix seconds
    pub last_authenticated_at: Option<i64>,
}

impl From<&User> for UserInfoResponse {
    fn from(user: &User) -> Self {
        Self {
            sub: user.user_id.to_string(),
            email: user.username.to_string(),
            scopes: user.scope_codes(),
            updated_at: user.updated_at.timestamp(),
            last_authenticated_at: user.last_authenticated_at.map(|t| t.timestamp()),
        }
    }
}
