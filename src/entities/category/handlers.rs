//! Category HTTP handlers
//!
//! Each handler translates HTTP input into a service call and the result
//! into a status code. Errors bubble up as `ApiError` values and are
//! rendered by its `IntoResponse` implementation.

use super::dto::{CreateCategoryDto, UpdateCategoryDto};
use super::model::Category;
use super::service::CategoryService;
use crate::core::error::ApiResult;
use crate::core::extractors::EntityId;
use crate::core::query::ListQuery;
use crate::core::validation::Validated;
use axum::{extract::State, http::StatusCode, response::Json};

/// Category-specific AppState
#[derive(Clone)]
pub struct CategoryAppState {
    pub service: CategoryService,
}

/// POST /category
pub async fn create_category(
    State(state): State<CategoryAppState>,
    Validated(dto): Validated<CreateCategoryDto>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.service.create(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /category
pub async fn list_categories(
    State(state): State<CategoryAppState>,
    query: ListQuery,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.service.find_all(query.tasks).await?;
    Ok(Json(categories))
}

/// GET /category/id/{id}
pub async fn get_category(
    State(state): State<CategoryAppState>,
    EntityId(id, _): EntityId<Category>,
) -> ApiResult<Json<Category>> {
    let category = state.service.find_one(&id).await?;
    Ok(Json(category))
}

/// PATCH /category/id/{id}
pub async fn update_category(
    State(state): State<CategoryAppState>,
    EntityId(id, _): EntityId<Category>,
    Validated(dto): Validated<UpdateCategoryDto>,
) -> ApiResult<Json<Category>> {
    let category = state.service.update(&id, dto.into()).await?;
    Ok(Json(category))
}

/// DELETE /category/id/{id}
pub async fn delete_category(
    State(state): State<CategoryAppState>,
    EntityId(id, _): EntityId<Category>,
) -> ApiResult<StatusCode> {
    state.service.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
