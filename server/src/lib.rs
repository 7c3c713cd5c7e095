//! HTTP boundary for the todo service.
//!
//! # Overview
//! A thin axum layer over `todo_core::TodoList`: each route maps one verb
//! and path onto one store operation and translates its return value into
//! a status code and JSON body. All domain rules live in the core crate;
//! the only validation done here is rejecting empty titles on create.
//!
//! The filter routes are registered before the `{id}` routes so that
//! `/todos/filter/completed` can never be read as an id lookup (axum also
//! prefers literal segments over captures).

pub mod error;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use todo_core::{Todo, TodoList, TodoUpdate};

use crate::error::ApiError;

/// Shared handle to the store. Handlers take the write lock for the whole
/// mutation, so read-then-write sequences like toggle never interleave.
pub type Db = Arc<RwLock<TodoList>>;

/// Request payload for `POST /todos`. A missing `title` deserializes to
/// the empty string so that missing and empty both fail validation the
/// same way; any other fields in the payload are ignored.
#[derive(Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

/// Response payload for `DELETE /todos/filter/completed`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Cleared {
    pub deleted: usize,
}

/// Builds the router with a fresh, empty store.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoList::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/filter/completed",
            get(list_completed).delete(clear_completed),
        )
        .route("/todos/filter/pending", get(list_pending))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/toggle", post(toggle_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.all().to_vec())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if input.title.is_empty() {
        return Err(ApiError::TitleRequired);
    }
    let todo = db.write().await.add(input.title);
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Ids are server-generated uuids, so a path segment that does not parse
/// can never name a live todo; it gets the same not-found answer as any
/// other unknown id.
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    id.parse().map_err(|_| ApiError::NotFound)
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let todos = db.read().await;
    todos.get(id).cloned().map(Json).ok_or(ApiError::NotFound)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(update): Json<TodoUpdate>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let mut todos = db.write().await;
    todos.update(id, update).map(Json).ok_or(ApiError::NotFound)
}

async fn toggle_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let mut todos = db.write().await;
    todos.toggle(id).map(Json).ok_or(ApiError::NotFound)
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let mut todos = db.write().await;
    if todos.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

async fn list_completed(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.completed().cloned().collect())
}

async fn list_pending(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.pending().cloned().collect())
}

async fn clear_completed(State(db): State<Db>) -> Json<Cleared> {
    let deleted = db.write().await.clear_completed();
    Json(Cleared { deleted })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_todo_accepts_plain_title() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(input.title, "Buy milk");
    }

    #[test]
    fn create_todo_missing_title_defaults_to_empty() {
        let input: CreateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_empty());
    }

    #[test]
    fn create_todo_ignores_unknown_fields() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","completed":true}"#).unwrap();
        assert_eq!(input.title, "Done");
    }

    #[test]
    fn cleared_serializes_count() {
        let json = serde_json::to_value(Cleared { deleted: 3 }).unwrap();
        assert_eq!(json["deleted"], 3);
    }
}
