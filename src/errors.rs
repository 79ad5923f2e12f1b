use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::core::client::whitebox_client::BackendError;
use crate::domain::common::error::PipelineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Monitoring backend error: {0}")]
    BackendError(String),

    #[error("Invalid metrics: {0}")]
    InvalidMetrics(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(e) = err.downcast_ref::<PipelineError>() {
            return AppError::InvalidMetrics(e.to_string());
        }
        if let Some(e) = err.downcast_ref::<BackendError>() {
            return AppError::BackendError(e.to_string());
        }
        if let Some(e) = err.downcast_ref::<validator::ValidationErrors>() {
            return AppError::BadRequest(e.to_string());
        }
        internal_error(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BackendError(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidMetrics(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "is_successful": false,
            "error_msg": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_errors_map_to_unprocessable() {
        let err: AppError = anyhow::Error::new(PipelineError::empty("accuracy")).into();
        assert!(matches!(err, AppError::InvalidMetrics(_)));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unknown_errors_map_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
