//! In-memory repositories for development and testing

use crate::core::error::StorageError;
use crate::core::service::{CategoryRepository, TaskRepository};
use crate::entities::category::{Category, CategoryChanges, NewCategory};
use crate::entities::task::Task;
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

fn poisoned<G>(mode: &'static str) -> impl FnOnce(PoisonError<G>) -> anyhow::Error {
    move |e| {
        StorageError::LockPoisoned {
            mode,
            message: e.to_string(),
        }
        .into()
    }
}

/// In-memory task store
///
/// Keeps insertion order so task lists come back in creation order.
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<IndexMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned("write"))?;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_category(&self, category_id: &Uuid) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned("read"))?;
        Ok(tasks
            .values()
            .filter(|task| &task.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn delete_by_category(&self, category_id: &Uuid) -> Result<usize> {
        let mut tasks = self.tasks.write().map_err(poisoned("write"))?;
        let before = tasks.len();
        tasks.retain(|_, task| &task.category_id != category_id);
        Ok(before - tasks.len())
    }
}

/// In-memory category repository
///
/// Uses an `RwLock` around an insertion-ordered map; identifier assignment
/// and record mutation happen under the write lock. Task enrichment and the
/// delete cascade go through the shared task store.
#[derive(Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<IndexMap<Uuid, Category>>>,
    tasks: Arc<dyn TaskRepository>,
}

impl InMemoryCategoryRepository {
    /// Create a repository with its own private task store
    pub fn new() -> Self {
        Self::with_tasks(Arc::new(InMemoryTaskRepository::new()))
    }

    /// Create a repository backed by an existing task store
    pub fn with_tasks(tasks: Arc<dyn TaskRepository>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(IndexMap::new())),
            tasks,
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, data: NewCategory) -> Result<Category> {
        let mut categories = self.categories.write().map_err(poisoned("write"))?;

        let mut category = Category::new(data);
        while categories.contains_key(&category.id) {
            category.id = Uuid::new_v4();
        }
        categories.insert(category.id, category.clone());

        Ok(category)
    }

    async fn find_all(&self, include_tasks: bool) -> Result<Vec<Category>> {
        let mut all: Vec<Category> = {
            let categories = self.categories.read().map_err(poisoned("read"))?;
            categories.values().cloned().collect()
        };

        if include_tasks {
            for category in &mut all {
                category.tasks = Some(self.tasks.find_by_category(&category.id).await?);
            }
        }

        Ok(all)
    }

    async fn find_one(&self, id: &Uuid) -> Result<Option<Category>> {
        let categories = self.categories.read().map_err(poisoned("read"))?;
        Ok(categories.get(id).cloned())
    }

    async fn update(&self, id: &Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut categories = self.categories.write().map_err(poisoned("write"))?;

        let Some(category) = categories.get_mut(id) else {
            return Ok(None);
        };
        category.apply(changes);

        Ok(Some(category.clone()))
    }

    async fn remove(&self, id: &Uuid) -> Result<bool> {
        let exists = {
            let categories = self.categories.read().map_err(poisoned("read"))?;
            categories.contains_key(id)
        };
        if !exists {
            return Ok(false);
        }

        // Tasks go first: if the cascade fails the category is still there
        // and the delete can be retried.
        self.tasks.delete_by_category(id).await?;

        let mut categories = self.categories.write().map_err(poisoned("write"))?;
        Ok(categories.shift_remove(id).is_some())
    }
}
