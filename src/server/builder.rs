//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::middleware::{SharedAuthProvider, handle_panic, require_auth, route_not_found};
use crate::core::auth::AuthProvider;
use anyhow::Result;
use axum::{Json, Router, middleware::from_fn_with_state, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with registered entity routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_auth_provider(StaticTokenProvider::new(["secret"]))
///     .register(CategoryDescriptor::new(repository))
///     .build()?;
/// ```
pub struct ServerBuilder {
    auth_provider: Option<SharedAuthProvider>,
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            auth_provider: None,
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the auth provider (required)
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Some(Arc::new(provider));
        self
    }

    /// Set an already shared auth provider (required)
    pub fn with_shared_auth_provider(mut self, provider: SharedAuthProvider) -> Self {
        self.auth_provider = Some(provider);
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes sit behind the same authentication stage as entity
    /// routes.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register an entity descriptor
    pub fn register(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Access the registry (route table, entity types)
    pub fn registry(&self) -> &EntityRegistry {
        &self.entity_registry
    }

    /// Build the final router
    ///
    /// Stages, outermost first: request tracing, panic containment, then
    /// (for entity and custom routes) bearer authentication. Health routes
    /// are public.
    pub fn build(mut self) -> Result<Router> {
        let auth_provider = self.auth_provider.take().ok_or_else(|| {
            anyhow::anyhow!("AuthProvider is required. Call .with_auth_provider()")
        })?;

        for (entity_type, route) in self.entity_registry.route_table() {
            tracing::info!(
                entity = %entity_type,
                method = %route.method,
                path = %route.path,
                schema = route.schema.as_deref().unwrap_or("-"),
                "route registered"
            );
        }

        let mut protected = self.entity_registry.build_routes();
        for custom_router in self.custom_routes {
            protected = protected.merge(custom_router);
        }
        let protected = protected.route_layer(from_fn_with_state(auth_provider, require_auth));

        let app = Self::health_routes()
            .merge(protected)
            .fallback(route_not_found)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http());

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr`, serves requests, and drains in-flight requests on
    /// SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
