//! Document export routes.

use axum::{
    Router,
    extract::State,
    http::{
        HeaderMap, HeaderValue,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use fintrack_core::export::{ExportFormat, render_report, render_workbook};
use fintrack_core::summary::summarize;
use fintrack_db::{TransactionRepository, UserRepository};
use fintrack_shared::AppError;

/// Creates the export router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/export/excel", get(export_excel))
        .route("/export/pdf", get(export_pdf))
}

fn document_response(
    format: ExportFormat,
    bytes: Vec<u8>,
) -> Result<impl IntoResponse, ApiError> {
    let today = Utc::now().date_naive();
    let disposition = format!("attachment; filename=\"{}\"", format.file_name(today));

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(format.content_type()));
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::Internal(e.to_string()))?,
    );

    Ok((headers, bytes))
}

/// GET /export/excel - Download the caller's history as a spreadsheet.
async fn export_excel(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TransactionRepository::new(state.db.clone());
    let history = repo.history_for_user(auth.user_id()).await?;

    let bytes = render_workbook(&history)?;
    info!(user_id = %auth.user_id(), rows = history.len(), "Spreadsheet export generated");

    document_response(ExportFormat::Excel, bytes)
}

/// GET /export/pdf - Download the caller's history as a PDF report.
async fn export_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let user_repo = UserRepository::new(state.db.clone());
    let owner = user_repo
        .find_by_id(auth.user_id())
        .await?
        .ok_or_else(|| AppError::NotFound("User no longer exists".into()))?;

    let repo = TransactionRepository::new(state.db.clone());
    let history = repo.history_for_user(auth.user_id()).await?;
    let report = summarize(&history);

    let today = Utc::now().date_naive();
    let bytes = render_report(&owner.name, &history, &report, today)?;
    info!(user_id = %auth.user_id(), rows = history.len(), "PDF export generated");

    document_response(ExportFormat::Pdf, bytes)
}
