//! Handler error type and its HTTP mapping.
//!
//! Validation failures become 400 and store failures 500; both carry
//! `{"error": "<message>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_store::StoreError;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body or non-integer path id. Raised before the store is
    /// touched.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Validation(msg) => debug!("Rejected request: {}", msg),
            ApiError::Store(err) => error!("Store failure: {}", err),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::Validation("bad id".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "bad id");
    }

    #[test]
    fn store_errors_map_to_internal_error_with_their_message() {
        for err in [
            StoreError::Connection("unreachable".to_string()),
            StoreError::Query("no such table: todos".to_string()),
            StoreError::Write("disk full".to_string()),
        ] {
            let message = err.to_string();
            let api: ApiError = err.into();
            assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api.to_string(), message);
        }
    }
}
