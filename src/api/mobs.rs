//! Mobs API routes

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::mob::{CreateMob, MobFilter, UpdateMob};
use crate::infrastructure::AppState;

/// Map domain failures onto the HTTP error body shape:
/// `{"detail": "<EntityName> <already exists|does not exist> - <id>"}`
fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists { .. } | DomainError::ConstraintViolation { .. } => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "unexpected storage failure");
    }
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}

pub async fn create_mob(
    State(state): State<AppState>,
    Json(payload): Json<CreateMob>,
) -> Response {
    match state.mobs.create(payload).await {
        Ok(mob) => (StatusCode::CREATED, Json(mob)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn get_mob(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.mobs.get(id).await {
        Ok(mob) => Json(mob).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn list_mobs(
    State(state): State<AppState>,
    Query(filter): Query<MobFilter>,
) -> Response {
    match state.mobs.get_all(filter).await {
        Ok(mobs) => Json(mobs).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn update_mob(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMob>,
) -> Response {
    match state.mobs.update(id, payload).await {
        Ok(mob) => Json(mob).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn delete_mob(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.mobs.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
