//! Shared model and synchronous API client for the todo service.
//!
//! # Overview
//! `Todo` is the one entity the service persists; the store, the HTTP
//! handlers and the client all exchange it. `TodoClient` builds
//! `HttpRequest` values and parses `HttpResponse` values for the `/v1/todos`
//! API without touching the network (host-does-IO pattern).
//!
//! # Design
//! - `TodoClient` is stateless and holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The server echoes submitted todos on create and update, so `parse_*`
//!   returns exactly what the caller sent, not the stored row.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::Todo;
