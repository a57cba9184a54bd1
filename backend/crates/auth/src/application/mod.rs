//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod seed;
pub mod tokens;

// Re-exports
pub use authenticate::{AuthContext, AuthenticateUseCase};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use refresh::RefreshUseCase;
pub use seed::SeedUserUseCase;
pub use tokens::TokenPairOutput;
