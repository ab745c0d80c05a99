use futures::TryStreamExt;
use mongodb::bson::{doc, Document};

use super::model::Todo;
use crate::db::{Db, DbError};

/// All todos in natural order, which is insertion order. Documents that do
/// not decode as a todo are logged and left out.
pub async fn list_todos(db: &Db) -> Result<Vec<Todo>, DbError> {
    let todos = db.todos::<Document>().await?;

    let rec: Vec<Document> = todos.find(doc! {}).await?.try_collect().await?;

    Ok(rec.into_iter().filter_map(decode_todo).collect())
}

pub async fn create_todo(db: &Db, title: String) -> Result<Todo, DbError> {
    let todos = db.todos::<Todo>().await?;

    let mut todo = Todo::new(title);
    let res = todos.insert_one(&todo).await?;
    todo.id = res.inserted_id.as_object_id();

    Ok(todo)
}

fn decode_todo(document: Document) -> Option<Todo> {
    let id = document.get("_id").cloned();

    match bson::from_document(document) {
        Ok(todo) => Some(todo),
        Err(e) => {
            tracing::warn!(id = ?id, error = %e, "skipping malformed todo document");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn decodes_well_formed_document() {
        let now = bson::DateTime::now();
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Todo de test 1",
            "completed": false,
            "createdAt": now,
            "updatedAt": now,
        };

        let todo = decode_todo(document).unwrap();
        assert_eq!(todo.title, "Todo de test 1");
    }

    #[test]
    fn skips_document_with_foreign_id() {
        let now = bson::DateTime::now();
        let document = doc! {
            "_id": "seeded-by-hand",
            "title": "Todo de test 2",
            "completed": false,
            "createdAt": now,
            "updatedAt": now,
        };

        assert!(decode_todo(document).is_none());
    }

    #[test]
    fn skips_document_without_timestamps() {
        let document = doc! { "_id": ObjectId::new(), "title": "no dates", "completed": false };

        assert!(decode_todo(document).is_none());
    }
}
