//! Category business layer
//!
//! A thin wrapper over the repository. It turns "absent" results into typed
//! not-found errors and is the place for future business rules, so the
//! handlers never talk to storage directly.

use super::model::{Category, CategoryChanges, NewCategory};
use crate::core::entity::Entity;
use crate::core::error::{ApiResult, EntityError};
use crate::core::service::CategoryRepository;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: NewCategory) -> ApiResult<Category> {
        let category = self.repository.create(data).await?;
        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn find_all(&self, include_tasks: bool) -> ApiResult<Vec<Category>> {
        let categories = self.repository.find_all(include_tasks).await?;
        tracing::debug!(count = categories.len(), include_tasks, "categories listed");
        Ok(categories)
    }

    pub async fn find_one(&self, id: &Uuid) -> ApiResult<Category> {
        self.repository
            .find_one(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: &Uuid, changes: CategoryChanges) -> ApiResult<Category> {
        let category = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id = %category.id, "category updated");
        Ok(category)
    }

    pub async fn remove(&self, id: &Uuid) -> ApiResult<()> {
        if !self.repository.remove(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(%id, "category removed");
        Ok(())
    }
}

fn not_found(id: &Uuid) -> crate::core::error::ApiError {
    EntityError::not_found(Category::resource_name(), id).into()
}
