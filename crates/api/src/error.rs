//! Error-to-response mapping for handlers that return `Result`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use fintrack_core::export::ExportError;
use fintrack_shared::AppError;

/// Wrapper rendering an [`AppError`] as a JSON error response.
///
/// Server-side failures (5xx) are logged with their real cause and returned
/// to the client with a generic message.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            error!(error = %self.0, "Request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(error: sea_orm::DbErr) -> Self {
        Self(AppError::Database(error.to_string()))
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        Self(AppError::Render(error.to_string()))
    }
}
