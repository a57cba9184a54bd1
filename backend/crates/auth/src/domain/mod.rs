//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{access_token::AccessToken, refresh_token::RefreshToken, user::User};
pub use repository::{
    AccessTokenRepository, AuthTransaction, AuthUnitOfWork, UserRepository,
};
