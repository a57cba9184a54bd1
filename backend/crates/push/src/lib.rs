//! Push Token Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! Registers device push tokens (FCM) for the authenticated user. Routes are
//! guarded by the bearer middleware from the `auth` crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PushError, PushResult};
pub use infra::postgres::PgPushRepository;
pub use presentation::router::{push_router, push_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
