//! Application Layer - Use Cases

pub mod update_token;

pub use update_token::{UpdatePushTokenInput, UpdatePushTokenUseCase};
