//! Field Violations
//!
//! A single field-level validation failure. Composite validation errors are a
//! list of these attached to one [`AppError`](super::app_error::AppError).

use serde::Serialize;

/// Where the offending value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationLocation {
    Body,
    Query,
    Path,
    Header,
}

/// One failed validation rule for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as it appears on the wire (e.g. `refreshToken`)
    pub key: String,
    #[serde(rename = "in")]
    pub location: ViolationLocation,
    /// Rule code, e.g. `required`, `length`, `email`
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldViolation {
    pub fn body(key: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            location: ViolationLocation::Body,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
