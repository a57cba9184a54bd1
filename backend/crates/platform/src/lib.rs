//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the feature crates:
//! - Cryptographic utilities (random opaque tokens, Base64)
//! - Password hashing (Argon2id with optional pepper)
//! - Bearer credential parsing
//! - Validated JSON extraction with composite field errors

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod validation;
