use std::sync::Arc;

use async_trait::async_trait;
use todo_core::Todo;

use crate::error::StoreResult;

/// Shared handle passed into every request handler.
pub type SharedStore = Arc<dyn TodoStore>;

/// Persistence operations over the todo collection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, in storage order. Empty when there are none.
    async fn list(&self) -> StoreResult<Vec<Todo>>;

    /// Insert `todo.text` and `todo.completed`. `todo.id` is ignored and the
    /// assigned id is not returned.
    async fn create(&self, todo: Todo) -> StoreResult<()>;

    /// Replace text and completed for `id`. Unknown ids are a no-op.
    async fn update(&self, id: i64, todo: Todo) -> StoreResult<()>;

    /// Remove `id`. Unknown ids are a no-op.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Release the underlying resources. Safe to call more than once.
    async fn close(&self);
}
