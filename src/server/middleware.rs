//! Request stages wrapped around every handler
//!
//! - `require_auth`: runs the configured [`AuthProvider`] before the handler
//! - `handle_panic`: turns a panicking handler into a 500 response
//! - `route_not_found`: JSON fallback for unmatched paths

use crate::core::auth::AuthProvider;
use crate::core::error::{ApiError, RequestError};
use axum::{
    extract::{Request, State},
    http::{Method, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;

/// Shared handle to the active auth provider
pub type SharedAuthProvider = Arc<dyn AuthProvider>;

/// Require an authenticated caller
pub async fn require_auth(
    State(provider): State<SharedAuthProvider>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match provider.authenticate(req.headers()).await {
        Ok(context) => {
            tracing::debug!(
                principal = context.principal(),
                method = %req.method(),
                path = %req.uri().path(),
                "request admitted"
            );
            Ok(next.run(req).await)
        }
        Err(err) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                reason = %err,
                "request rejected"
            );
            Err(err.into())
        }
    }
}

/// Convert a handler panic into an internal error response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Fallback for requests that match no registered route
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    RequestError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}
