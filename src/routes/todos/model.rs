use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::oid::ObjectId;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A todo as stored in the `todos` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// A not-yet-persisted todo. Timestamps are cut to milliseconds, the
    /// precision BSON dates keep.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now().trunc_subsecs(3);
        Self {
            id: None,
            title: title.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, Bson};

    #[test]
    fn new_todo_is_open_with_equal_timestamps() {
        let todo = Todo::new("Todo de test 1");

        assert_eq!(todo.id, None);
        assert_eq!(todo.title, "Todo de test 1");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
        assert_eq!(todo.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn serializes_to_stored_document_shape() {
        let document = bson::to_document(&Todo::new("Buy milk")).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").unwrap(), "Buy milk");
        assert!(!document.get_bool("completed").unwrap());
        assert!(matches!(document.get("createdAt"), Some(Bson::DateTime(_))));
        assert!(matches!(document.get("updatedAt"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn reads_directly_inserted_documents() {
        let id = ObjectId::new();
        let now = bson::DateTime::now();
        let document = doc! {
            "_id": id,
            "title": "Todo de test 2",
            "completed": false,
            "createdAt": now,
            "updatedAt": now,
        };

        let todo: Todo = bson::from_document(document).unwrap();

        assert_eq!(todo.id, Some(id));
        assert_eq!(todo.title, "Todo de test 2");
        assert_eq!(todo.created_at, now.to_chrono());
    }
}
