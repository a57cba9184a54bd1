pub mod access_token;
pub mod refresh_token;
pub mod user;

pub use access_token::AccessToken;
pub use refresh_token::RefreshToken;
pub use user::User;
