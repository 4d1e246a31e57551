//! Entity descriptor for Category
//!
//! Wires controller → service → repository and declares the route table.

use super::dto::{CreateCategoryDto, UpdateCategoryDto};
use super::handlers::{
    CategoryAppState, create_category, delete_category, get_category, list_categories,
    update_category,
};
use super::service::CategoryService;
use crate::core::service::CategoryRepository;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::router::{RouteEntry, RouteInfo, build_routes};
use axum::Router;
use std::sync::Arc;

/// Descriptor for the Category entity
pub struct CategoryDescriptor {
    state: CategoryAppState,
}

impl CategoryDescriptor {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            state: CategoryAppState {
                service: CategoryService::new(repository),
            },
        }
    }

    fn table(&self) -> Vec<RouteEntry<CategoryAppState>> {
        vec![
            RouteEntry::post("/category", "Create a category", create_category)
                .validated::<CreateCategoryDto>(),
            RouteEntry::get("/category", "List all categories", list_categories),
            RouteEntry::get("/category/id/{id}", "Get a category by ID", get_category),
            RouteEntry::patch(
                "/category/id/{id}",
                "Update an existing category by ID",
                update_category,
            )
            .validated::<UpdateCategoryDto>(),
            RouteEntry::delete(
                "/category/id/{id}",
                "Delete an existing category by ID",
                delete_category,
            ),
        ]
    }
}

impl EntityDescriptor for CategoryDescriptor {
    fn entity_type(&self) -> &str {
        "category"
    }

    fn routes(&self) -> Vec<RouteInfo> {
        self.table().iter().map(RouteEntry::info).collect()
    }

    fn build_routes(&self) -> Router {
        build_routes(self.table(), self.state.clone())
    }
}
