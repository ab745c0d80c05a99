use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Todo;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

impl CreateTodo {
    /// Parses a POST body. An empty body counts as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    pub fn into_title(self) -> Result<String, ApiError> {
        match self.title {
            None => Err(ApiError::MissingParameter("title")),
            Some(title) if title.is_empty() => Err(ApiError::EmptyParameter("title")),
            Some(title) => Ok(title),
        }
    }
}

/// JSON representation of a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoView {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.map(|id| id.to_hex()),
            title: todo.title,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}
