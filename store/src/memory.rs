//! Map-backed `TodoStore` for tests and throwaway runs.
//!
//! Ids come from a counter that only grows, matching SQLite's AUTOINCREMENT:
//! a deleted id is never handed out again.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use todo_core::Todo;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::TodoStore;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Todo>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        if self.is_closed() {
            return Err(StoreError::Query("store is closed".to_string()));
        }
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, todo: Todo) -> StoreResult<()> {
        if self.is_closed() {
            return Err(StoreError::Write("store is closed".to_string()));
        }
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Todo {
                id,
                text: todo.text,
                completed: todo.completed,
            },
        );
        debug!("Inserted todo {}", id);
        Ok(())
    }

    async fn update(&self, id: i64, todo: Todo) -> StoreResult<()> {
        if self.is_closed() {
            return Err(StoreError::Write("store is closed".to_string()));
        }
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&id) {
            row.text = todo.text;
            row.completed = todo.completed;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        if self.is_closed() {
            return Err(StoreError::Write("store is closed".to_string()));
        }
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
