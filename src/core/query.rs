//! Query parameters for list endpoints

use axum::extract::{FromRequestParts, Query};
use axum::http::{Uri, request::Parts};
use std::convert::Infallible;

/// Query parameters accepted by `GET /category`
///
/// The query string is never rejected: unknown keys are ignored, a repeated
/// key uses its first value, and an unreadable query string means defaults.
///
/// # Example
/// ```text
/// GET /category              -> tasks not loaded
/// GET /category?tasks=true   -> each category carries its tasks
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Load the related tasks of every category
    pub tasks: bool,
}

impl ListQuery {
    pub fn from_uri(uri: &Uri) -> Self {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable query string ignored");
                Vec::new()
            }
        };

        let tasks = pairs
            .iter()
            .find(|(key, _)| key == "tasks")
            .is_some_and(|(_, value)| parse_flag(value));

        Self { tasks }
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}

/// Parse a query-string flag
///
/// `true` and `1` (any case) enable the flag; anything else leaves it off.
pub fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("true") || raw == "1"
}
