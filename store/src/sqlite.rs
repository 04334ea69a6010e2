//! SQLite-backed `TodoStore`.
//!
//! # Design
//! A sqlx connection pool is shared by all requests. Each method runs exactly
//! one parameterized statement in autocommit mode and SQLite's locking
//! serializes writers; `busy_timeout` makes a writer wait rather than fail
//! while another holds the lock. File databases run in WAL mode by default so
//! readers never wait on a writer.
//!
//! An in-memory database exists only as long as some connection to it is
//! open, so `:memory:` locations get a single connection that the pool never
//! recycles.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use todo_core::Todo;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::store::TodoStore;

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        completed BOOLEAN NOT NULL CHECK (completed IN (0, 1))
    )";

/// Pool settings for `SqliteStore::open`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
    /// Write-ahead logging for file databases; ignored for `:memory:`.
    pub enable_wal: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout_seconds: 5,
            enable_wal: true,
        }
    }
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `location` and ensure the
    /// `todos` table exists.
    ///
    /// `location` may be a file path, a `sqlite:` URL, or `:memory:`.
    pub async fn open(location: &str, config: &StoreConfig) -> StoreResult<Self> {
        let busy_timeout = Duration::from_secs(config.busy_timeout_seconds);
        let mut options = SqliteConnectOptions::from_str(location)
            .map_err(connection_error)?
            .create_if_missing(true)
            .busy_timeout(busy_timeout);

        let in_memory = is_in_memory(location);
        if config.enable_wal && !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options
            .acquire_timeout(busy_timeout)
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(connection_error)?;

        info!("Opened todo store at {}", location);
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let rows: Vec<(i64, String, bool)> =
            sqlx::query_as("SELECT id, text, completed FROM todos")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::Query(format!("failed to query todos: {e}")))?;

        debug!("Listed {} todos", rows.len());
        Ok(rows
            .into_iter()
            .map(|(id, text, completed)| Todo {
                id,
                text,
                completed,
            })
            .collect())
    }

    async fn create(&self, todo: Todo) -> StoreResult<()> {
        sqlx::query("INSERT INTO todos (text, completed) VALUES (?, ?)")
            .bind(&todo.text)
            .bind(todo.completed)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(format!("failed to insert todo: {e}")))?;
        debug!("Inserted todo");
        Ok(())
    }

    async fn update(&self, id: i64, todo: Todo) -> StoreResult<()> {
        let result = sqlx::query("UPDATE todos SET text = ?, completed = ? WHERE id = ?")
            .bind(&todo.text)
            .bind(todo.completed)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(format!("failed to update todo: {e}")))?;
        debug!("Updated todo {} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(format!("failed to delete todo: {e}")))?;
        debug!("Deleted todo {} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            info!("Closed todo store");
        }
    }
}

fn connection_error(e: sqlx::Error) -> StoreError {
    StoreError::Connection(e.to_string())
}

fn is_in_memory(location: &str) -> bool {
    let database = location
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    database.split('?').next() == Some(":memory:") || database.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        SqliteStore::open(":memory:", &StoreConfig::default())
            .await
            .unwrap()
    }

    #[test]
    fn in_memory_locations_are_recognised() {
        assert!(is_in_memory(":memory:"));
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("file:todos?mode=memory&cache=shared"));
        assert!(!is_in_memory("todo.db"));
        assert!(!is_in_memory("sqlite:data/todo.db"));
    }

    #[tokio::test]
    async fn fresh_store_lists_empty() {
        let store = memory_store().await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_ignores_supplied_id() {
        let store = memory_store().await;
        store
            .create(Todo {
                id: 500,
                text: "buy milk".to_string(),
                completed: false,
            })
            .await
            .unwrap();

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].text, "buy milk");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = memory_store().await;
        store.create(Todo::new("first", false)).await.unwrap();
        let first = store.list().await.unwrap()[0].id;
        store.delete(first).await.unwrap();

        store.create(Todo::new("second", false)).await.unwrap();
        let second = store.list().await.unwrap()[0].id;
        assert!(second > first);
    }

    #[tokio::test]
    async fn table_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");
        let location = path.to_str().unwrap();

        let store = SqliteStore::open(location, &StoreConfig::default())
            .await
            .unwrap();
        store.create(Todo::new("persisted", true)).await.unwrap();
        store.close().await;

        let reopened = SqliteStore::open(location, &StoreConfig::default())
            .await
            .unwrap();
        let todos = reopened.list().await.unwrap();
        assert_eq!(
            todos,
            vec![Todo {
                id: 1,
                text: "persisted".to_string(),
                completed: true,
            }]
        );
    }

    #[tokio::test]
    async fn unreachable_location_is_a_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("todo.db");

        let result = SqliteStore::open(path.to_str().unwrap(), &StoreConfig::default()).await;
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }

    #[tokio::test]
    async fn operations_after_close_fail() {
        let store = memory_store().await;
        store.close().await;
        store.close().await;

        assert!(matches!(store.list().await, Err(StoreError::Query(_))));
        assert!(matches!(
            store.create(Todo::new("late", false)).await,
            Err(StoreError::Write(_))
        ));
    }
}
