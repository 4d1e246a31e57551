//! Path extractors that report failures as [`ApiError`]

use crate::core::entity::Entity;
use crate::core::error::{ApiError, EntityError};
use axum::extract::{FromRequestParts, Path, rejection::PathRejection};
use axum::http::request::Parts;
use std::marker::PhantomData;
use uuid::Uuid;

/// The `{id}` segment of an entity route, parsed as a UUID
///
/// A segment that cannot be a UUID (including one that is not valid UTF-8)
/// cannot name a stored record, so it is rejected as `ENTITY_NOT_FOUND` for
/// the entity type `E`.
///
/// ```rust,ignore
/// pub async fn get_category(EntityId(id, _): EntityId<Category>) -> ... { }
/// ```
#[derive(Debug)]
pub struct EntityId<E>(pub Uuid, pub PhantomData<fn() -> E>);

impl<S, E> FromRequestParts<S> for EntityId<E>
where
    S: Send + Sync,
    E: Entity,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(PathRejection::MissingPathParams(e)) => {
                return Err(ApiError::Internal(e.body_text()));
            }
            Err(_) => last_segment(parts.uri.path()).to_string(),
        };

        Uuid::parse_str(&raw)
            .map(|id| EntityId(id, PhantomData))
            .map_err(|_| EntityError::not_found(E::resource_name(), &raw).into())
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
