//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login with username (e-mail) + password, issuing opaque bearer tokens
//! - Single-use refresh tokens rotated on every refresh
//! - Logout deleting the access token and an optional refresh token atomically
//! - Bearer middleware exposing the caller as [`AuthContext`]
//!
//! ## Security Model
//! - Passwords hashed with Argon2id with an optional pepper
//! - Tokens are 256-bit random values, looked up by exact match
//! - Deleting a token row revokes it immediately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::AuthContext;
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::*;
    pub use crate::infra::postgres::{PgAuthRepository, PgAuthTransaction};
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
