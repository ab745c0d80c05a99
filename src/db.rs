//! Shared MongoDB connection.
//!
//! [`Db`] starts out disconnected and is handed to the router through
//! [`AppState`](crate::state::AppState). `main` connects it once before
//! serving and closes it after the server has drained.

use std::sync::Arc;

use mongodb::{bson::doc, Client, Collection, Database};
use thiserror::Error;
use tokio::sync::RwLock;

/// Name of the collection holding todo documents.
pub const TODOS: &str = "todos";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database is not connected")]
    NotConnected,

    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("database query failed: {0}")]
    Query(#[from] mongodb::error::Error),
}

struct Connection {
    client: Client,
    database: Database,
}

#[derive(Clone, Default)]
pub struct Db {
    inner: Arc<RwLock<Option<Connection>>>,
}

impl Db {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects to `uri` and selects `db_name`, pinging the server so an
    /// unreachable database fails here rather than on the first request.
    /// Does nothing if already connected.
    ///
    /// The lock is only taken to store the result, so handlers keep
    /// answering (with `NotConnected`) while the server is being reached.
    pub async fn connect(&self, uri: &str, db_name: &str) -> Result<(), DbError> {
        if self.is_connected().await {
            tracing::debug!(db = db_name, "already connected, skipping");
            return Ok(());
        }

        let client = Client::with_uri_str(uri).await.map_err(DbError::Connect)?;
        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(DbError::Connect)?;

        let mut guard = self.inner.write().await;
        if guard.is_some() {
            drop(guard);
            tracing::debug!(db = db_name, "connected concurrently, discarding new client");
            client.shutdown().await;
            return Ok(());
        }

        tracing::info!(db = db_name, "connected to MongoDB");
        *guard = Some(Connection { client, database });
        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Returns the active database handle.
    pub async fn handle(&self) -> Result<Database, DbError> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|conn| conn.database.clone())
            .ok_or(DbError::NotConnected)
    }

    pub async fn todos<T: Send + Sync>(&self) -> Result<Collection<T>, DbError> {
        Ok(self.handle().await?.collection(TODOS))
    }

    /// Shuts the client down. A no-op when not connected.
    pub async fn close(&self) {
        let conn = self.inner.write().await.take();
        if let Some(conn) = conn {
            conn.client.shutdown().await;
            tracing::info!(db = conn.database.name(), "MongoDB connection closed");
        }
    }
}
