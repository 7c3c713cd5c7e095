//! Domain types for the todo store.
//!
//! # Design
//! `Todo` is the wire shape as well as the stored shape; `created_at`
//! serializes as RFC 3339 under the JSON key `createdAt`, so responses
//! stay parseable by any ISO-8601 consumer. `TodoUpdate` keeps each field
//! present-or-absent (not merely nullable) so "omit" and "set" are
//! distinguishable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Partial update for an existing todo. Only the fields present are
/// applied; omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
