//! Transaction management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use fintrack_core::summary::TransactionKind;
use fintrack_db::{
    TransactionRepository,
    entities::transactions,
    repositories::{CreateTransactionInput, TransactionChanges},
};

/// Creates the transaction router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

/// Request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category label.
    pub category: String,
    /// Monetary amount, must be positive.
    pub amount: Decimal,
    /// Optional free-form note.
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date the transaction occurred.
    #[serde(rename = "date")]
    pub occurred_on: NaiveDate,
}

/// Request body for partially updating a transaction.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    /// New transaction kind.
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    /// New category label.
    pub category: Option<String>,
    /// New amount, must be positive when present.
    pub amount: Option<Decimal>,
    /// New description. Absent leaves the stored value untouched; an
    /// explicit JSON `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New calendar date.
    #[serde(rename = "date")]
    pub occurred_on: Option<NaiveDate>,
}

/// Any present value (including `null`) deserializes to `Some`, so a missing
/// field stays distinguishable from `"description": null`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Transaction as returned by the API.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category label.
    pub category: String,
    /// Monetary amount.
    pub amount: Decimal,
    /// Free-form note, if any.
    pub description: Option<String>,
    /// Calendar date the transaction occurred, ISO `YYYY-MM-DD`.
    #[serde(rename = "date")]
    pub occurred_on: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind.into(),
            category: model.category,
            amount: model.amount,
            description: model.description,
            occurred_on: model.occurred_at.format("%Y-%m-%d").to_string(),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

fn midnight_utc(date: NaiveDate) -> chrono::DateTime<chrono::FixedOffset> {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

fn validation_error(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": message
        })),
    )
        .into_response()
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "Transaction not found"
        })),
    )
        .into_response()
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An internal error occurred"
        })),
    )
        .into_response()
}

/// GET /transactions - List the caller's transactions, newest date first.
async fn list_transactions(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.db.clone());

    match repo.list_by_user(auth.user_id()).await {
        Ok(rows) => {
            let body: Vec<TransactionResponse> =
                rows.into_iter().map(TransactionResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list transactions");
            internal_error()
        }
    }
}

/// POST /transactions - Record a new transaction.
async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    if payload.category.trim().is_empty() {
        return validation_error("Category is required");
    }
    if payload.amount <= Decimal::ZERO {
        return validation_error("Amount must be greater than zero");
    }

    let repo = TransactionRepository::new(state.db.clone());
    let input = CreateTransactionInput {
        user_id: auth.user_id(),
        kind: payload.kind.into(),
        category: payload.category.trim().to_owned(),
        amount: payload.amount,
        description: payload.description.filter(|d| !d.is_empty()),
        occurred_at: midnight_utc(payload.occurred_on),
    };

    match repo.create(input).await {
        Ok(row) => {
            info!(transaction_id = %row.id, user_id = %auth.user_id(), "Transaction created");
            (StatusCode::CREATED, Json(TransactionResponse::from(row))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create transaction");
            internal_error()
        }
    }
}

/// GET /transactions/{id} - Fetch one transaction owned by the caller.
async fn get_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.db.clone());

    match repo.find_for_user(auth.user_id(), id).await {
        Ok(Some(row)) => (StatusCode::OK, Json(TransactionResponse::from(row))).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to fetch transaction");
            internal_error()
        }
    }
}

/// PUT /transactions/{id} - Partially update a transaction owned by the caller.
async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTransactionRequest>,
) -> impl IntoResponse {
    if let Some(amount) = payload.amount {
        if amount <= Decimal::ZERO {
            return validation_error("Amount must be greater than zero");
        }
    }
    if let Some(category) = &payload.category {
        if category.trim().is_empty() {
            return validation_error("Category cannot be empty");
        }
    }

    let repo = TransactionRepository::new(state.db.clone());
    let changes = TransactionChanges {
        kind: payload.kind.map(Into::into),
        category: payload.category.map(|c| c.trim().to_owned()),
        amount: payload.amount,
        description: payload.description.map(|d| d.filter(|s| !s.is_empty())),
        occurred_at: payload.occurred_on.map(midnight_utc),
    };

    match repo.update_for_user(auth.user_id(), id, changes).await {
        Ok(Some(row)) => {
            info!(transaction_id = %row.id, "Transaction updated");
            (StatusCode::OK, Json(TransactionResponse::from(row))).into_response()
        }
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to update transaction");
            internal_error()
        }
    }
}

/// DELETE /transactions/{id} - Delete a transaction owned by the caller.
async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.db.clone());

    match repo.delete_for_user(auth.user_id(), id).await {
        Ok(true) => {
            info!(transaction_id = %id, "Transaction deleted");
            (
                StatusCode::OK,
                Json(json!({ "message": "Transaction deleted" })),
            )
                .into_response()
        }
        Ok(false) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to delete transaction");
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_description_absent_is_untouched() {
        let payload: UpdateTransactionRequest =
            serde_json::from_str(r#"{"category": "Food"}"#).unwrap();
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_update_description_null_clears() {
        let payload: UpdateTransactionRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(payload.description, Some(None));
    }

    #[test]
    fn test_update_description_value_sets() {
        let payload: UpdateTransactionRequest =
            serde_json::from_str(r#"{"description": "coffee"}"#).unwrap();
        assert_eq!(payload.description, Some(Some("coffee".to_string())));
    }
}
