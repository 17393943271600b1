//! Domain types for the todo resource.
//!
//! # Design
//! The persisted `Todo` always carries all four fields: `description` is
//! stored as a plain string with `""` standing in for "no description",
//! and `completed` is always a concrete boolean. The empty-description-is-
//! absent convention lives entirely in `TodoView`, the response-shaping
//! type, so the storage representation stays uniform.

use serde::{Deserialize, Serialize};

/// A todo item as persisted in the store. `id` is an opaque string assigned
/// once at creation and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Outward representation used by list and create responses. An empty
/// `description` is omitted from the JSON entirely, so callers cannot tell
/// "empty description" from "never set".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoView {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

impl From<Todo> for TodoView {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: (!todo.description.is_empty()).then_some(todo.description),
            completed: todo.completed,
        }
    }
}
