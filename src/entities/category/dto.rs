//! Request schemas for the category write endpoints

use super::model::{CategoryChanges, NewCategory};
use crate::core::validation::RequestSchema;
use crate::core::validation::filters::{FilterRule, trim};
use serde::Deserialize;
use validator::Validate;

const NAME_FILTERS: &[FilterRule] = &[FilterRule::new("name", trim)];

/// Body of `POST /category`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl RequestSchema for CreateCategoryDto {
    const NAME: &'static str = "createCategoryDto";

    fn filters() -> &'static [FilterRule] {
        NAME_FILTERS
    }
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        NewCategory { name: dto.name }
    }
}

/// Body of `PATCH /category/id/{id}`; every field is optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

impl RequestSchema for UpdateCategoryDto {
    const NAME: &'static str = "updateCategoryDto";

    fn filters() -> &'static [FilterRule] {
        NAME_FILTERS
    }
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        CategoryChanges { name: dto.name }
    }
}
