//! Error types for the todo API client.
//!
//! # Design
//! The service has no 404s: updates and deletes of unknown ids succeed. Every
//! unexpected status therefore lands in `HttpError`, carrying the server's
//! `{"error": ...}` message when one was sent and the raw body otherwise.

use std::fmt;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a status other than the one the operation expects.
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpError { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
