//! Domain Layer
//!
//! This layer contains:
//! - Domain entities (PushToken)
//! - Domain value objects (PushProvider)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
