use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menowell_generation::GenerationError;
use menowell_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing or empty x-user-id header")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    User(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("generation error: {0}")]
    Generation(GenerationError),

    #[error("{0}")]
    Internal(String),
}

impl From<menowell_shared::Error> for AppError {
    fn from(value: menowell_shared::Error) -> Self {
        match value {
            menowell_shared::Error::Validate(errors) => AppError::Validation(errors.to_string()),
            menowell_shared::Error::User(message) => AppError::User(message),
            menowell_shared::Error::NotFound(what) => AppError::NotFound(what),
            menowell_shared::Error::Forbidden => AppError::User("forbidden".to_string()),
            menowell_shared::Error::Server(message) => AppError::Internal(message),
            menowell_shared::Error::Unknown(error) => AppError::Internal(error.to_string()),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(value: GenerationError) -> Self {
        match value {
            // Batch came up short: a user-visible outcome, not a 5xx.
            GenerationError::TooFewRecipes { .. } => AppError::User(value.to_string()),
            other => AppError::Generation(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Validation(message) | AppError::User(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            AppError::Store(error) => {
                tracing::error!("store error: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::Generation(error) => {
                tracing::error!("generation error: {error}");
                (StatusCode::BAD_GATEWAY, error.to_string())
            }
            AppError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
