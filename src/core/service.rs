//! Repository traits for category persistence

use crate::entities::category::{Category, CategoryChanges, NewCategory};
use crate::entities::task::Task;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations for categories
///
/// Implementations own the stored records and are responsible for assigning
/// unique identifiers atomically. The rest of the crate is agnostic to the
/// underlying storage mechanism.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category and return the stored record
    async fn create(&self, data: NewCategory) -> Result<Category>;

    /// List all categories in creation order
    ///
    /// When `include_tasks` is set, every returned category carries its
    /// task collection (possibly empty).
    async fn find_all(&self, include_tasks: bool) -> Result<Vec<Category>>;

    /// Get a category by ID
    async fn find_one(&self, id: &Uuid) -> Result<Option<Category>>;

    /// Merge the supplied fields into an existing category
    ///
    /// Returns `None` when no record matches.
    async fn update(&self, id: &Uuid, changes: CategoryChanges) -> Result<Option<Category>>;

    /// Hard-delete a category together with its tasks
    ///
    /// Tasks are deleted first, so a failed cascade leaves the category in
    /// place. Returns `false` when no record matches.
    async fn remove(&self, id: &Uuid) -> Result<bool>;
}

/// Lookup of the tasks related to a category
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a task
    ///
    /// The category is not checked: callers file tasks under ids they got
    /// from the category repository.
    async fn create(&self, task: Task) -> Result<Task>;

    /// All tasks filed under a category, in creation order
    async fn find_by_category(&self, category_id: &Uuid) -> Result<Vec<Task>>;

    /// Delete every task filed under a category, returning how many were removed
    ///
    /// Used when deleting a category to maintain referential integrity
    async fn delete_by_category(&self, category_id: &Uuid) -> Result<usize>;
}
