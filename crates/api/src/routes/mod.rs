//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod auth;
pub mod export;
pub mod health;
pub mod profile;
pub mod summary;
pub mod transactions;

/// Creates the API router: public routes plus the authenticated surface.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(transactions::routes())
        .merge(summary::routes())
        .merge(export::routes())
        .merge(profile::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
