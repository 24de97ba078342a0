use crate::{schema, state::AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

// Liveness check - never touches the store
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness check: pings the store with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let ping = state.store.ping();
    match tokio::time::timeout(std::time::Duration::from_secs(5), ping).await {
        Ok(Ok(())) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Version/Build info plus the live listen settings and record constraints
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    let server = &state.config.server;
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "server": {
            "host": server.host,
            "port": server.port,
        },
        "store": "sqlite",
        "schema": {
            "required": ["username", "email"],
            "min_age": schema::MIN_AGE,
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
