//! Shared Kernel
//!
//! Vocabulary shared by every feature crate:
//! - Unified error type, error kinds and result alias
//! - Field-level validation violations carried by 400 responses
//! - Typed UUID identifiers
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod violation;
}
pub mod id;
