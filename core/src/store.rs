//! The in-memory todo store.
//!
//! # Design
//! `TodoList` owns its todos outright; every operation goes through a
//! method taking `&self` or `&mut self`, so each one is atomic by
//! construction. Read accessors hand out borrows, mutating operations
//! return owned clones of the stored value. The backing `Vec` keeps
//! iteration in insertion order; lookups are linear, which is fine for a
//! single-user store.
//!
//! The store never validates titles and never encodes HTTP semantics:
//! absence is signalled with `Option` (or `bool` for `delete`), and
//! rejecting empty titles is the HTTP boundary's job.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{Todo, TodoUpdate};

/// Authoritative collection of todos, keyed by id, iterated in insertion
/// order.
#[derive(Debug, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new todo with a fresh id, `completed = false` and the
    /// current time, and returns a copy of the stored value.
    pub fn add(&mut self, title: impl Into<String>) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.push(todo.clone());
        todo
    }

    /// Looks up a todo by id.
    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// All stored todos, in insertion order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Applies the fields present in `update` to the todo with the given
    /// id and returns the updated value. Returns `None`, with no
    /// mutation, when the id is unknown. This is the single mutation
    /// primitive; `toggle` is built on top of it.
    pub fn update(&mut self, id: Uuid, update: TodoUpdate) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        if let Some(title) = update.title {
            todo.title = title;
        }
        if let Some(completed) = update.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    /// Inverts the `completed` flag of the todo with the given id.
    pub fn toggle(&mut self, id: Uuid) -> Option<Todo> {
        let completed = self.get(id)?.completed;
        self.update(
            id,
            TodoUpdate {
                title: None,
                completed: Some(!completed),
            },
        )
    }

    /// Removes the todo with the given id. Returns whether a removal
    /// occurred; deleting an unknown id is a no-op returning `false`.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() < before
    }

    /// The completed todos, in insertion order.
    pub fn completed(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|todo| todo.completed)
    }

    /// The not-yet-completed todos, in insertion order.
    pub fn pending(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|todo| !todo.completed)
    }

    /// Removes every completed todo and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.completed);
        before - self.todos.len()
    }
}
