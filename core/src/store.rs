//! Key-value store contract and the in-memory implementation.
//!
//! # Design
//! The handler consumes persistence only through `TodoStore`, a narrow
//! get/put/update/delete/scan contract. `put` and `update` are
//! unconditional upserts; existence checks belong to the handler, and
//! read-then-write sequences built on this trait are not transactional —
//! concurrent writers to the same id race, last write wins.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::todo::Todo;

/// The three mutable fields written back by `update`. The update operation
/// always rewrites all of them, even when unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Persistence contract for the todo resource.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Read a single item; `None` when the id has no stored item.
    async fn get(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// Unconditional upsert of a full item.
    async fn put(&self, todo: Todo) -> Result<(), StoreError>;

    /// Unconditional overwrite of the mutable fields, returning the new
    /// state under the given id.
    async fn update(&self, id: &str, fields: TodoFields) -> Result<Todo, StoreError>;

    /// Unconditional removal; removing an absent id is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Full-table read. No ordering contract beyond each item appearing
    /// exactly once.
    async fn scan(&self) -> Result<Vec<Todo>, StoreError>;
}

/// In-memory store backed by a hash map, used by the server binary and as
/// the test substitute for a real backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.read().await.get(id).cloned())
    }

    async fn put(&self, todo: Todo) -> Result<(), StoreError> {
        self.todos.write().await.insert(todo.id.clone(), todo);
        Ok(())
    }

    async fn update(&self, id: &str, fields: TodoFields) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: id.to_string(),
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
        };
        self.todos.write().await.insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.todos.write().await.remove(id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.values().cloned().collect())
    }
}
