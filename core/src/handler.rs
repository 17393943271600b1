//! Resource handler: orchestrates store reads and writes around the
//! validator, applying the default and merge policy for each operation.
//!
//! # Design
//! The store is an injected constructor parameter, so tests substitute an
//! in-memory implementation of the same contract. Update-style operations
//! read first and report `NotFound` before the body is even parsed; the
//! subsequent write is not transactional with that read, so concurrent
//! writers to one id race and the last write wins (see `store`).

use uuid::Uuid;

use crate::error::TodoError;
use crate::store::{TodoFields, TodoStore};
use crate::todo::{Todo, TodoView};
use crate::validate;

/// Stateless per-request orchestrator for the five todo operations. All
/// state lives in the injected store.
pub struct TodoResource<S> {
    store: S,
}

impl<S: TodoStore> TodoResource<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Full scan. Empty descriptions are dropped from the output.
    pub async fn list(&self) -> Result<Vec<TodoView>, TodoError> {
        let todos = self.store.scan().await?;
        Ok(todos.into_iter().map(TodoView::from).collect())
    }

    /// Single read, returned as stored (a persisted empty description is
    /// visible here, unlike in list and create responses).
    pub async fn get(&self, id: &str) -> Result<Todo, TodoError> {
        self.store.get(id).await?.ok_or(TodoError::NotFound)
    }

    /// Validate, assign a fresh id, persist, and return the created item.
    /// The response matches the persisted state exactly, minus a stripped
    /// empty description.
    pub async fn create(&self, body: &str) -> Result<TodoView, TodoError> {
        let payload = validate::parse_body(body)?;
        let fields = validate::validate_create(&payload)?;
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
        };
        self.store.put(todo.clone()).await?;
        tracing::debug!(id = %todo.id, "created todo");
        Ok(TodoView::from(todo))
    }

    /// Full replace: `title` and `completed` always come from the body
    /// (both passed the required-truthy gate), `description` falls back to
    /// the stored value when the body does not carry a usable one. All
    /// three fields are rewritten even when unchanged.
    pub async fn replace(&self, id: &str, body: &str) -> Result<Todo, TodoError> {
        let current = self.store.get(id).await?.ok_or(TodoError::NotFound)?;
        let payload = validate::parse_body(body)?;
        let fields = validate::validate_replace(&payload)?;
        let next = TodoFields {
            title: fields.title,
            description: fields.description.unwrap_or(current.description),
            completed: fields.completed,
        };
        Ok(self.store.update(id, next).await?)
    }

    /// Partial update: a field replaces the stored value only when the
    /// body carries a truthy value for it. An explicit `completed: false`
    /// or `title: ""` therefore leaves the stored value untouched.
    pub async fn patch(&self, id: &str, body: &str) -> Result<Todo, TodoError> {
        let current = self.store.get(id).await?.ok_or(TodoError::NotFound)?;
        let payload = validate::parse_body(body)?;
        let fields = validate::validate_patch(&payload)?;
        let next = TodoFields {
            title: fields
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or(current.title),
            description: fields
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or(current.description),
            completed: fields.completed.filter(|c| *c).unwrap_or(current.completed),
        };
        Ok(self.store.update(id, next).await?)
    }

    /// Remove the item. Repeating a successful delete reports `NotFound`;
    /// a deleted id is indistinguishable from one that never existed.
    pub async fn delete(&self, id: &str) -> Result<(), TodoError> {
        self.store.get(id).await?.ok_or(TodoError::NotFound)?;
        self.store.delete(id).await?;
        tracing::debug!(%id, "deleted todo");
        Ok(())
    }
}
