//! Core module containing fundamental traits and types

pub mod auth;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod query;
pub mod service;
pub mod validation;

pub use auth::{AuthContext, AuthProvider, NoAuthProvider, StaticTokenProvider};
pub use entity::Entity;
pub use error::{ApiError, ApiResult};
pub use extractors::EntityId;
pub use query::ListQuery;
pub use service::{CategoryRepository, TaskRepository};
