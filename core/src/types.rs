//! Domain model for the todo service.
//!
//! # Design
//! A single flat struct is used for input and output alike. On input, `id`
//! and `completed` fall back to their zero values when omitted; `text` is
//! required. The store ignores `id` on create, so a freshly submitted todo
//! usually carries `0`.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default)]
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// A not-yet-persisted todo with id `0`.
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: 0,
            text: text.into(),
            completed,
        }
    }
}
