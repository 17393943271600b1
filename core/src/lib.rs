//! Core logic for the todo CRUD service.
//!
//! # Overview
//! Implements the resource manager behind the HTTP surface: payload
//! validation, default-value policy, and field-merge semantics for the
//! five operations (list, get, create, full-replace, partial-update,
//! delete), plus the narrow key-value store contract they run against.
//! The transport layer lives in the `todo-server` crate; this crate never
//! touches HTTP framing.
//!
//! # Design
//! - `validate` is pure: raw JSON value in, normalized field set or
//!   rejection reason out.
//! - `TodoResource` owns the per-operation orchestration and takes its
//!   store as an injected dependency, so tests run against `MemoryStore`.
//! - The required-field checks on full-replace and the partial-update
//!   merge are truthiness-based, not presence-based. That asymmetry
//!   (`completed: false` rejected on PUT, ignored on PATCH) is deliberate
//!   API-compatible behavior and is pinned by tests.

pub mod error;
pub mod handler;
pub mod store;
pub mod todo;
pub mod validate;

pub use error::{StoreError, TodoError};
pub use handler::TodoResource;
pub use store::{MemoryStore, TodoFields, TodoStore};
pub use todo::{Todo, TodoView};
