//! Financial summary route.

use axum::{Json, Router, extract::State, routing::get};

use crate::{AppState, error::ApiError, middleware::AuthUser};
use fintrack_core::summary::{SummaryReport, summarize};
use fintrack_db::TransactionRepository;

/// Creates the summary router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}

/// GET /summary - Aggregate the caller's full history into a report.
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SummaryReport>, ApiError> {
    let repo = TransactionRepository::new(state.db.clone());
    let history = repo.history_for_user(auth.user_id()).await?;

    Ok(Json(summarize(&history)))
}
