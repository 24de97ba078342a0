use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection},
        Path, State,
    },
    http::{header, HeaderMap},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    types::{NewUser, User, UserId, UserPatch, USER_DELETED, USER_UPDATED},
};

// POST /new
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> AppResult<Json<User>> {
    let Json(new) = payload?;
    let user = state.store.create(new).await?;
    tracing::debug!(id = %user.id, "User created");
    Ok(Json(user))
}

// GET /
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.store.find_all().await?;
    Ok(Json(users))
}

// DELETE /delete/{id}
// Reports success whether or not a record matched.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<&'static str>> {
    let id: UserId = id.parse()?;
    let outcome = state.store.delete_by_id(id).await?;
    if !outcome.is_matched() {
        tracing::debug!(%id, "Delete matched no user");
    }
    Ok(Json(USER_DELETED))
}

// PUT /update/{id}
// Reports success whether or not a record matched; the record is not returned.
// A missing, empty or non-JSON body is an empty patch.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<&'static str>> {
    let id: UserId = id.parse()?;
    let body = body.map_err(|e| AppError::Body(e.body_text()))?;
    let patch = if body.is_empty() || !is_json(&headers) {
        UserPatch::default()
    } else {
        let Json(patch) = Json::<UserPatch>::from_bytes(&body)?;
        patch
    };
    let outcome = state.store.update_by_id(id, patch).await?;
    if !outcome.is_matched() {
        tracing::debug!(%id, "Update matched no user");
    }
    Ok(Json(USER_UPDATED))
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
