//! Category entity module

pub mod descriptor;
pub mod dto;
pub mod handlers;
pub mod model;
pub mod service;

pub use descriptor::CategoryDescriptor;
pub use dto::{CreateCategoryDto, UpdateCategoryDto};
pub use handlers::*;
pub use model::{Category, CategoryChanges, NewCategory};
pub use service::CategoryService;
