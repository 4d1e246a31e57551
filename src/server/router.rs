//! Route registration tables
//!
//! A resource declares its endpoints as a list of [`RouteEntry`] values:
//! method, path, a one-line summary, the request schema validated on the way
//! in (if any), and the handler. The same table builds the axum router and
//! describes the resource for startup logging.

use crate::core::validation::RequestSchema;
use axum::Router;
use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodRouter};
use serde::Serialize;

/// One endpoint of a resource's registration table
pub struct RouteEntry<S> {
    pub method: Method,
    pub path: &'static str,
    pub summary: &'static str,
    pub schema: Option<&'static str>,
    handler: MethodRouter<S>,
}

impl<S> RouteEntry<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn new(
        method: Method,
        path: &'static str,
        summary: &'static str,
        handler: MethodRouter<S>,
    ) -> Self {
        Self {
            method,
            path,
            summary,
            schema: None,
            handler,
        }
    }

    pub fn get<H, T>(path: &'static str, summary: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Method::GET, path, summary, routing::get(handler))
    }

    pub fn post<H, T>(path: &'static str, summary: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Method::POST, path, summary, routing::post(handler))
    }

    pub fn patch<H, T>(path: &'static str, summary: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Method::PATCH, path, summary, routing::patch(handler))
    }

    pub fn delete<H, T>(path: &'static str, summary: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Method::DELETE, path, summary, routing::delete(handler))
    }

    /// Label the endpoint with the request schema its handler extracts
    ///
    /// The label only describes the route for logging. Validation happens in
    /// the handler's `Validated<T>` argument, which must use the same `T`.
    pub fn validated<T: RequestSchema>(mut self) -> Self {
        self.schema = Some(T::NAME);
        self
    }

    pub fn info(&self) -> RouteInfo {
        RouteInfo {
            method: self.method.to_string(),
            path: self.path.to_string(),
            summary: self.summary.to_string(),
            schema: self.schema.map(str::to_string),
        }
    }
}

/// Description of a registered endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// Build a router from a registration table
///
/// Entries sharing a path are merged into one method router.
pub fn build_routes<S>(entries: Vec<RouteEntry<S>>, state: S) -> Router
where
    S: Clone + Send + Sync + 'static,
{
    entries
        .into_iter()
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, entry.handler)
        })
        .with_state(state)
}
