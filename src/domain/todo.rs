use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task item. The id is assigned by the repository on creation and
/// never changes afterwards; `created_at` is stamped once, `updated_at` moves
/// on every successful update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Full replacement of the mutable fields; id and created_at stay put.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
