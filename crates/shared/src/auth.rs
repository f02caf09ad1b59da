//! Authentication types for JWT and tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

/// Registration request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// User display name.
    pub name: String,
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

/// Response payload for successful login or registration.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Authenticated user info.
    pub user: UserInfo,
    /// Access token.
    pub token: String,
    /// Token expiration in seconds.
    pub expires_in: i64,
}

/// User info returned in auth and profile responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: Uuid,
    /// User display name.
    pub name: String,
    /// User email.
    pub email: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Profile update request. All fields optional; absent fields are unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New password (ignored when empty).
    pub password: Option<String>,
}
