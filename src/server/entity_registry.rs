//! Entity registry for managing entity descriptors and their routes

use super::router::RouteInfo;
use axum::Router;
use indexmap::IndexMap;

/// Trait that describes how to build routes for an entity
///
/// Each exposed entity implements this trait to provide its CRUD routes and
/// the registration table they come from.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (e.g., "category")
    fn entity_type(&self) -> &str;

    /// The registration table: one entry per method and path
    fn routes(&self) -> Vec<RouteInfo>;

    /// Build the CRUD routes for this entity
    fn build_routes(&self) -> Router;
}

/// Registry for all entities in the application
///
/// Descriptors are kept in registration order.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: IndexMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is used as the key; registering the same type
    /// twice replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Every registered endpoint, tagged with its entity type
    pub fn route_table(&self) -> Vec<(String, RouteInfo)> {
        self.descriptors
            .iter()
            .flat_map(|(entity_type, descriptor)| {
                descriptor
                    .routes()
                    .into_iter()
                    .map(move |route| (entity_type.clone(), route))
            })
            .collect()
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
