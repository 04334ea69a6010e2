//! HTTP surface of the todo service.
//!
//! # Overview
//! `app` binds the four `/v1/todos` routes to their handlers over a shared
//! store. `serve` is the process lifecycle: open the store, bind, serve until
//! a shutdown signal, close the store.

pub mod config;
pub mod error;
pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, put},
    Router,
};
use todo_store::SharedStore;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::handlers::{create_todo, delete_todo, list_todos, update_todo};

/// Build the router. `/v1/todos` without the trailing slash reaches the same
/// handlers as `/v1/todos/`.
pub fn app(store: SharedStore) -> Router {
    let todos = Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo));

    Router::new()
        .nest("/v1", todos)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Mount the files under `dir` at `/static`.
pub fn with_static_files(router: Router, dir: &Path) -> Router {
    router.nest_service("/static", ServeDir::new(dir))
}

/// Serve `app(store)` on an already-bound listener until the process exits.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Run the service described by `config`.
///
/// The store is opened before the listener is bound, so a bad database
/// location fails startup without ever accepting a request. Once opened, the
/// store is closed on every exit path.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = config
        .open_store()
        .await
        .with_context(|| format!("failed to open store at {}", config.database))?;

    let addr = config.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            store.close().await;
            return Err(e).with_context(|| format!("failed to bind {addr}"));
        }
    };
    info!("listening on {}", addr);

    let mut router = app(Arc::clone(&store));
    if let Some(dir) = &config.static_dir {
        info!("serving static files from {}", dir.display());
        router = with_static_files(router, dir);
    }

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    store.close().await;
    info!("server stopped");
    result.context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
