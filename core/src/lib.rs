//! In-memory todo store for the todo service.
//!
//! # Overview
//! `TodoList` owns the authoritative set of todos and exposes atomic
//! single-step operations over it: add, get, list, partial update,
//! toggle, delete, filter by completion state, and bulk-clear of
//! completed items. State lives entirely in memory and is scoped to the
//! process lifetime; there is no persistence.
//!
//! # Design
//! - The store is a plain synchronous struct. `&mut self` receivers make
//!   every mutation exclusive, so callers that need shared access wrap it
//!   in their own lock (the server uses `Arc<RwLock<TodoList>>`).
//! - Absence is a value, not an error: lookups return `Option`, `delete`
//!   returns `bool`. The store has no failure modes of its own.
//! - HTTP concerns (status codes, empty-title rejection) stay in the
//!   server crate; this crate knows nothing about the wire.

pub mod store;
pub mod types;

pub use store::TodoList;
pub use types::{Todo, TodoUpdate};
