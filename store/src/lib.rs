//! Persistence for the todo service.
//!
//! # Overview
//! `TodoStore` is the capability set every backend provides: list, create,
//! update, delete and close. `SqliteStore` keeps todos in a single SQLite
//! table; `MemoryStore` keeps them in a map and backs tests and throwaway
//! runs.
//!
//! # Design
//! - Every operation is one auto-committed statement, so the engine's own
//!   locking is the only synchronization. No application-level locks.
//! - Updates and deletes that match no row succeed without effect.
//! - Create does not report the assigned id; callers list to find it.

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoreConfig};
pub use store::{SharedStore, TodoStore};

#[cfg(any(test, feature = "test-utils"))]
pub use store::MockTodoStore;
