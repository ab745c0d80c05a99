use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

mod health;
pub mod todos;

pub use health::health;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/todos",
            get(todos::routes::list).post(todos::routes::create),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// The full application: routes, request tracing and shared state.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
