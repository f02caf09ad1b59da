//! Profile management routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::put,
};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, middleware::AuthUser};
use fintrack_core::auth::hash_password;
use fintrack_db::{UserRepository, repositories::ProfileChanges};
use fintrack_shared::auth::{UpdateProfileRequest, UserInfo};

/// Creates the profile router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", put(update_profile))
}

/// PUT /profile - Update the caller's name, email, or password.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new(state.db.clone());

    let name = payload.name.map(|n| n.trim().to_owned());
    if let Some(name) = &name {
        if name.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "Name cannot be empty"
                })),
            )
                .into_response();
        }
    }

    let email = payload.email.map(|e| e.trim().to_lowercase());
    if let Some(email) = &email {
        if !email.contains('@') {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "Email address is not valid"
                })),
            )
                .into_response();
        }

        // A new email must not collide with another account
        match user_repo.email_taken_by_other(email, auth.user_id()).await {
            Ok(true) => {
                return (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "email_taken",
                        "message": "An account with this email already exists"
                    })),
                )
                    .into_response();
            }
            Ok(false) => {}
            Err(e) => {
                error!(error = %e, "Database error checking email uniqueness");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal_error",
                        "message": "An error occurred updating the profile"
                    })),
                )
                    .into_response();
            }
        }
    }

    let password_hash = match payload.password {
        Some(password) if password.len() < 8 => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "Password must be at least 8 characters"
                })),
            )
                .into_response();
        }
        Some(password) => match hash_password(&password) {
            Ok(h) => Some(h),
            Err(e) => {
                error!(error = %e, "Failed to hash new password");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal_error",
                        "message": "An error occurred updating the profile"
                    })),
                )
                    .into_response();
            }
        },
        None => None,
    };

    let changes = ProfileChanges {
        name,
        email,
        password_hash,
    };

    match user_repo.update_profile(auth.user_id(), changes).await {
        Ok(Some(user)) => {
            info!(user_id = %user.id, "Profile updated");
            let body = UserInfo {
                id: user.id,
                name: user.name,
                email: user.email,
                created_at: user.created_at.with_timezone(&Utc),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": "User no longer exists"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update profile");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred updating the profile"
                })),
            )
                .into_response()
        }
    }
}
