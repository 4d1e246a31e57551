//! Axum extractor for validated payloads
//!
//! This module provides the `Validated<T>` extractor that filters and
//! validates request payloads before they reach handlers.

use super::filters::{self, FilterRule};
use crate::core::error::{ApiError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// A named request schema
///
/// The typed struct carries its declarative rules through
/// `#[derive(Validate)]`; `filters` lists the transformations applied to the
/// raw JSON before deserialization.
pub trait RequestSchema: DeserializeOwned + Validate {
    /// Schema name, used in logs
    const NAME: &'static str;

    fn filters() -> &'static [FilterRule] {
        &[]
    }
}

/// Axum extractor that validates and filters request bodies
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create(
///     Validated(dto): Validated<CreateCategoryDto>,
/// ) -> ApiResult<Json<Category>> {
///     // dto is already filtered and validated
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: RequestSchema + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> =
            Json::from_request(req, state)
                .await
                .map_err(|rejection| ValidationError::InvalidJson {
                    message: rejection.body_text(),
                })?;

        if !payload.is_object() {
            return Err(ValidationError::InvalidJson {
                message: "expected a JSON object".to_string(),
            }
            .into());
        }

        let payload = filters::apply(payload, T::filters());

        let dto: T = serde_json::from_value(payload).map_err(|e| ValidationError::InvalidJson {
            message: e.to_string(),
        })?;

        if let Err(errors) = dto.validate() {
            tracing::debug!(schema = T::NAME, "payload rejected");
            return Err(ValidationError::from(errors).into());
        }

        Ok(Validated(dto))
    }
}
