//! API DTOs (Data Transfer Objects)

use serde::Deserialize;
use validator::Validate;

/// Update push token request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePushTokenRequest {
    #[validate(required, length(max = 500))]
    pub new_token: Option<String>,
    /// Token being replaced, if the device had one
    #[validate(length(max = 500))]
    pub old_token: Option<String>,
    #[validate(required, length(max = 500))]
    pub provider: Option<String>,
}
