//! HTTP transport for the todo service.
//!
//! # Design
//! Thin glue over `todo_core::TodoResource`: the routing table, the status
//! code mapping, and nothing else. Handlers extract the raw body as a
//! `String` and hand it to the core untouched, so malformed JSON gets the
//! service's uniform 400 instead of a framework-level rejection. Success
//! bodies are JSON; error bodies are the plain-text reason strings carried
//! by `TodoError`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use todo_core::{MemoryStore, TodoError, TodoResource};

type SharedResource = Arc<TodoResource<MemoryStore>>;

/// Build the router with a fresh in-memory store.
pub fn app() -> Router {
    app_with(MemoryStore::new())
}

/// Build the router around an existing store, for callers that want to
/// share or pre-seed it.
pub fn app_with(store: MemoryStore) -> Router {
    let resource: SharedResource = Arc::new(TodoResource::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(replace_todo)
                .patch(patch_todo)
                .delete(delete_todo),
        )
        .with_state(resource)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Map handler errors to transport status codes and plain-text reasons.
fn error_response(err: TodoError) -> Response {
    match err {
        TodoError::MalformedPayload | TodoError::Validation(_) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        TodoError::NotFound => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
        TodoError::Store(e) => {
            tracing::error!(error = %e, "store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error accessing todo store.".to_string(),
            )
                .into_response()
        }
    }
}

async fn list_todos(State(resource): State<SharedResource>) -> Response {
    match resource.list().await {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_todo(State(resource): State<SharedResource>, Path(id): Path<String>) -> Response {
    match resource.get(&id).await {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_todo(State(resource): State<SharedResource>, body: String) -> Response {
    match resource.create(&body).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn replace_todo(
    State(resource): State<SharedResource>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    match resource.replace(&id, &body).await {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => error_response(err),
    }
}

async fn patch_todo(
    State(resource): State<SharedResource>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    match resource.patch(&id, &body).await {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_todo(State(resource): State<SharedResource>, Path(id): Path<String>) -> Response {
    match resource.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
