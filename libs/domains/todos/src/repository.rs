use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{NewToDo, ToDo};

/// Data access for ToDo items.
///
/// Each method is a single statement against the datastore. Row counts are
/// returned as-is; turning zero rows into NotFound is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert and return the assigned id
    async fn insert(&self, todo: NewToDo) -> TodoResult<i64>;

    /// Every row whose id matches
    async fn find_by_id(&self, id: i64) -> TodoResult<Vec<ToDo>>;

    /// Overwrite title, description and reminder; returns rows affected
    async fn update(&self, todo: ToDo) -> TodoResult<u64>;

    /// Returns rows affected
    async fn delete(&self, id: i64) -> TodoResult<u64>;

    async fn list(&self) -> TodoResult<Vec<ToDo>>;
}
