//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::PushAppState;
pub use router::{push_router, push_router_generic};
