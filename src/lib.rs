//! REST API for a todo list stored in MongoDB.
//!
//! `GET /todos` lists every todo in insertion order and `POST /todos`
//! creates one from a `{"title": ...}` body.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use db::{Db, DbError};
pub use error::ApiError;
pub use routes::app;
pub use state::AppState;
