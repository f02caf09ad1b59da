//! Authentication routes for register, login, and the current-user view.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, middleware::AuthUser};
use fintrack_core::auth::{hash_password, verify_password};
use fintrack_db::UserRepository;
use fintrack_shared::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Creates the authenticated auth router.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

fn user_info(user: fintrack_db::entities::users::Model) -> UserInfo {
    UserInfo {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at.with_timezone(&Utc),
    }
}

/// POST /auth/register - Create a new account and return a token.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let name = payload.name.trim();
    let email = payload.email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() || payload.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "Name, email, and password are required"
            })),
        )
            .into_response();
    }

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

    if payload.password.len() < 8 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "Password must be at least 8 characters"
            })),
        )
            .into_response();
    }

    let user_repo = UserRepository::new(state.db.clone());

    // Reject duplicate emails up front
    match user_repo.email_exists(&email).await {
        Ok(true) => {
            info!(email = %email, "Registration attempt with existing email");
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
            error!(error = %e, "Database error during registration");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during registration"
                })),
            )
                .into_response();
        }
    }

    let password_hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during registration"
                })),
            )
                .into_response();
        }
    };

    let user = match user_repo.create(name, &email, &password_hash).await {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "Failed to create user");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during registration"
                })),
            )
                .into_response();
        }
    };

    let token = match state.jwt_service.generate_token(user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate token");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during registration"
                })),
            )
                .into_response();
        }
    };

    info!(user_id = %user.id, "User registered");

    let response = AuthResponse {
        user: user_info(user),
        token,
        expires_in: state.jwt_service.token_expires_in(),
    };

    (StatusCode::CREATED, Json(response)).into_response()
}

/// POST /auth/login - Authenticate a user and return a token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new(state.db.clone());
    let email = payload.email.trim().to_lowercase();

    // Find user by email
    let user = match user_repo.find_by_email(&email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %email, "Login attempt for non-existent user");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid email or password"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response();
        }
    };

    // Verify password
    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid email or password"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response();
        }
    }

    let token = match state.jwt_service.generate_token(user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate token");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response();
        }
    };

    info!(user_id = %user.id, "User logged in");

    let response = AuthResponse {
        user: user_info(user),
        token,
        expires_in: state.jwt_service.token_expires_in(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /auth/me - Return the authenticated user's profile.
async fn me(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let user_repo = UserRepository::new(state.db.clone());

    match user_repo.find_by_id(auth.user_id()).await {
        Ok(Some(user)) => (StatusCode::OK, Json(user_info(user))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": "User no longer exists"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Database error fetching current user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred fetching the profile"
                })),
            )
                .into_response()
        }
    }
}
