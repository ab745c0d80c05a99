use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthData {
    status: u16,
    database: &'static str,
}

/// Liveness probe. Always 200 while the process serves requests; the
/// database field only reports whether the shared connection is open.
pub async fn health(State(state): State<AppState>) -> Json<HealthData> {
    let database = if state.db.is_connected().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthData {
        status: StatusCode::OK.as_u16(),
        database,
    })
}
