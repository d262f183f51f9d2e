use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use tracing::{debug, error};

use crate::repositories::RepositoryError;
use crate::utils::validation::FieldError;

pub const ROOM_NOT_FOUND: &str = "Room not found";
pub const INVALID_ROOM_ATTRIBUTES: &str = "Invalid attributes provided for Room";

/// Raised when a room id has no record. The optional message is for logs only,
/// the response reason is always [`ROOM_NOT_FOUND`].
#[derive(Debug, Default, Error)]
#[error("{}", .message.as_deref().unwrap_or(ROOM_NOT_FOUND))]
pub struct RoomNotFound {
    message: Option<String>,
}

impl RoomNotFound {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid attributes provided for Room")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    NotFound(#[from] RoomNotFound),
    /// Unreadable body: 415 for a missing JSON content type, 400 for everything else.
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: Option<String>,
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: Some(message.into()),
            errors: None,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedBody(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(errors) => ErrorBody {
                errors: Some(errors),
                ..ErrorBody::new(status, INVALID_ROOM_ATTRIBUTES)
            },
            AppError::NotFound(e) => {
                debug!(reason = %e, "Room lookup missed");
                ErrorBody::new(status, ROOM_NOT_FOUND)
            }
            AppError::MalformedBody(rejection) => ErrorBody::new(status, rejection.body_text()),
            AppError::Repository(e) => {
                error!(error = %e, "Room store request failed");
                ErrorBody::new(status, "Room store unavailable")
            }
        };
        (status, Json(body)).into_response()
    }
}
