use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] recetario_shared::Error),

    #[error("missing x-user-id header")]
    Unauthorized,

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),
}

pub type AppResult<T> = Result<T, AppError>;

pub fn not_found(what: impl Into<String>) -> AppError {
    AppError::Domain(recetario_shared::Error::NotFound(what.into()))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use recetario_shared::Error;

        let (status, error, message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "missing x-user-id header".to_string(),
            ),
            AppError::Json(rejection) => {
                (rejection.status(), rejection_label(rejection.status()), rejection.body_text())
            }
            AppError::Query(rejection) => {
                (rejection.status(), rejection_label(rejection.status()), rejection.body_text())
            }
            AppError::Domain(Error::Validate(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationFailed",
                errors.to_string(),
            ),
            AppError::Domain(Error::User(message)) => {
                (StatusCode::BAD_REQUEST, "BadRequest", message)
            }
            AppError::Domain(err @ Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NotFound", err.to_string())
            }
            AppError::Domain(Error::Unknown(err)) => {
                tracing::error!("Unexpected error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({"error": error, "message": message}))).into_response()
    }
}

fn rejection_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => "ValidationFailed",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UnsupportedMediaType",
        StatusCode::PAYLOAD_TOO_LARGE => "PayloadTooLarge",
        _ => "BadRequest",
    }
}
