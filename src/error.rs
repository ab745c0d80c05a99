use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Parameter '{0}' can't be empty")]
    EmptyParameter(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Database(#[from] DbError),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_msg: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::EmptyParameter(_) => StatusCode::PRECONDITION_FAILED,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Database(DbError::NotConnected) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // database details stay in the logs
        let error_msg = match &self {
            ApiError::Database(DbError::NotConnected) => "Database unavailable".to_string(),
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "Internal server error".to_string()
            }
            other => {
                tracing::debug!(status = %status, error = %other, "request rejected");
                other.to_string()
            }
        };

        (status, Json(ErrorBody { error_msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, String, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let content_type = resp.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_parameter_is_422() {
        let (status, content_type, body) = render(ApiError::MissingParameter("title")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, serde_json::json!({ "errorMsg": "Missing parameter 'title'" }));
    }

    #[tokio::test]
    async fn empty_parameter_is_412() {
        let (status, _, body) = render(ApiError::EmptyParameter("title")).await;

        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(body, serde_json::json!({ "errorMsg": "Parameter 'title' can't be empty" }));
    }

    #[tokio::test]
    async fn disconnected_database_is_503() {
        let (status, _, body) = render(ApiError::from(DbError::NotConnected)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["errorMsg"], "Database unavailable");
    }
}
