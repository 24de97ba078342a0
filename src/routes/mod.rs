//! HTTP route handlers for the users API.
//!
//! - `users`: the User resource (create, list, delete, update)
//! - `health`: liveness, readiness and build info

pub mod health;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Request bodies above this size are rejected before reaching a handler.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Builds the complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(users::list_users))
        .route("/new", post(users::create_user))
        .route("/delete/{id}", delete(users::delete_user))
        .route("/update/{id}", put(users::update_user))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/version", get(health::version))
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        // Any origin may call the API
        .layer(CorsLayer::permissive())
}
