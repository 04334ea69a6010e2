//! Command-line and environment configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use todo_store::{MemoryStore, SharedStore, SqliteStore, StoreConfig, StoreResult};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Memory,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server", version, about = "CRUD service for todo items")]
pub struct Config {
    /// Database location: a file path, a `sqlite:` URL, or `:memory:`
    #[arg(long, env = "TODO_DATABASE", default_value = "todo.db")]
    pub database: String,

    /// Storage backend
    #[arg(long, env = "TODO_BACKEND", value_enum, default_value_t = Backend::Sqlite)]
    pub backend: Backend,

    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "TODO_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// SQLite connection pool size
    #[arg(long, env = "TODO_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            max_connections: self.max_connections,
            ..StoreConfig::default()
        }
    }

    /// Open the configured backend. The memory backend ignores `database`.
    pub async fn open_store(&self) -> StoreResult<SharedStore> {
        match self.backend {
            Backend::Sqlite => {
                let store = SqliteStore::open(&self.database, &self.store_config()).await?;
                Ok(Arc::new(store))
            }
            Backend::Memory => Ok(Arc::new(MemoryStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_are_parsed() {
        let config = Config::try_parse_from([
            "todo-server",
            "--database",
            ":memory:",
            "--backend",
            "memory",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
            "--static-dir",
            "./static",
            "--max-connections",
            "2",
        ])
        .unwrap();

        assert_eq!(config.database, ":memory:");
        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, Some(PathBuf::from("./static")));
        assert_eq!(config.store_config().max_connections, 2);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = Config::try_parse_from(["todo-server", "--backend", "postgres"]);
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let result = Config::try_parse_from(["todo-server", "--port", "http"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn memory_backend_opens_empty() {
        let config =
            Config::try_parse_from(["todo-server", "--backend", "memory"]).unwrap();
        let store = config.open_store().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
