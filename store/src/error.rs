//! Store error taxonomy.
//!
//! "No matching row" is deliberately absent: it is not a failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened, reached, or prepared.
    #[error("connection error: {0}")]
    Connection(String),

    /// A read failed.
    #[error("query error: {0}")]
    Query(String),

    /// An insert, update or delete failed at the engine level.
    #[error("write error: {0}")]
    Write(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
