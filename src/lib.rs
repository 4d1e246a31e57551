//! # Category API
//!
//! A layered REST resource for task categories built on axum.
//!
//! ## Layers
//!
//! - **Router**: a registration table of method, path and handler per entity
//! - **Validator**: the `Validated<T>` extractor filters and checks JSON bodies
//! - **Controller**: thin handlers that map HTTP to service calls
//! - **Service**: business rules and not-found handling
//! - **Repository**: storage behind the `CategoryRepository` trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use category_api::prelude::*;
//!
//! let tasks = Arc::new(InMemoryTaskRepository::new());
//! let repository = Arc::new(InMemoryCategoryRepository::with_tasks(tasks));
//!
//! ServerBuilder::new()
//!     .with_auth_provider(StaticTokenProvider::new(["secret"]))
//!     .register(CategoryDescriptor::new(repository))
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{AuthContext, AuthProvider, NoAuthProvider, StaticTokenProvider},
        entity::Entity,
        error::{ApiError, ApiResult},
        extractors::EntityId,
        query::ListQuery,
        service::{CategoryRepository, TaskRepository},
        validation::{FilterRule, RequestSchema, Validated},
    };

    // === Macros ===
    pub use crate::impl_entity;

    // === Entities ===
    pub use crate::entities::{
        Category, Task,
        category::{
            CategoryChanges, CategoryDescriptor, CategoryService, CreateCategoryDto, NewCategory,
            UpdateCategoryDto,
        },
    };

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, RouteEntry, ServerBuilder};

    // === Storage ===
    pub use crate::storage::{InMemoryCategoryRepository, InMemoryTaskRepository};

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Common External Types ===
    pub use chrono::{DateTime, Utc};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
