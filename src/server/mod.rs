//! Server module for building HTTP servers with registered entity routes
//!
//! This module provides a `ServerBuilder` that assembles:
//! - CRUD routes for every registered entity descriptor
//! - Bearer authentication in front of those routes
//! - Public health check routes and a JSON fallback for unknown paths

pub mod builder;
pub mod entity_registry;
pub mod middleware;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use middleware::SharedAuthProvider;
pub use router::{RouteEntry, RouteInfo, build_routes};
