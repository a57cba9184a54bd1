//! Value Object Module

pub mod token_value;
pub mod user_scope;
pub mod username;

pub use token_value::TokenValue;
pub use user_scope::UserScope;
pub use username::Username;
