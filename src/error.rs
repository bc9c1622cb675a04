use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Everything a request can fail with, mapped onto the uniform
/// `{success:false, message}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authorized, no token")]
    NoToken,
    #[error("Not authorized, token failed")]
    TokenFailed,
    #[error("Todo not found")]
    TodoNotFound,
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::DuplicateEmail | ApiError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NoToken | ApiError::TokenFailed => StatusCode::UNAUTHORIZED,
            ApiError::TodoNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The cause stays in the server log; the caller only sees the
        // generic message.
        if let ApiError::Internal(source) = &self {
            error!(error = %source, "unhandled error");
        }
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
