use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crm_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.is::<JsonRejection>() {
            StatusCode::BAD_REQUEST
        } else if self.0.is::<PathRejection>() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn message(&self) -> String {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            rejection.body_text()
        } else if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            rejection.body_text()
        } else {
            self.0.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_message = self.message();

        if status_code.is_server_error() {
            tracing::error!(status = status_code.as_u16(), error = %error_message, "Request failed");
        } else {
            tracing::warn!(status = status_code.as_u16(), error = %error_message, "Request rejected");
        }

        (status_code, Json(ErrorBody { error_message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
