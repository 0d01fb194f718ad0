use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use db::models::log::{CreateLog, Log, LogError, UpdateLog};
use serde::Deserialize;
use ts_rs::TS;

use crate::{
    AppState,
    error::{ApiError, FieldError},
    routes::{Removed, parse_id},
};

#[derive(Debug, Deserialize, TS)]
pub struct CreateLogRequest {
    pub tech: Option<String>,
    pub message: Option<String>,
    pub attention: Option<bool>,
}

impl CreateLogRequest {
    fn validate(self) -> Result<CreateLog, ApiError> {
        let mut errors = Vec::new();
        if self.message.as_deref().unwrap_or("").is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        // `attention` is NOT NULL in storage but has no client-facing
        // check; its absence surfaces as a storage-level failure.
        let attention = self
            .attention
            .ok_or_else(|| ApiError::Internal("attention flag missing from payload".to_string()))?;

        Ok(CreateLog {
            tech: self.tech,
            message: self.message.unwrap_or_default(),
            attention,
        })
    }
}

pub async fn get_logs(State(state): State<AppState>) -> Result<Json<Vec<Log>>, ApiError> {
    Ok(Json(Log::find_all(&state.db.conn).await?))
}

pub async fn search_logs(
    State(state): State<AppState>,
    Path(text): Path<String>,
) -> Result<Json<Vec<Log>>, ApiError> {
    Ok(Json(Log::search(&state.db.conn, &text).await?))
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<CreateLogRequest>,
) -> Result<Json<Log>, ApiError> {
    let data = payload.validate()?;
    Ok(Json(Log::create(&state.db.conn, &data).await?))
}

pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateLog>,
) -> Result<Json<Log>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(Log::update(&state.db.conn, id, &payload).await?))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Removed>, ApiError> {
    let id = parse_id(&id)?;
    let rows = Log::delete(&state.db.conn, id).await?;
    if rows == 0 {
        return Err(LogError::NotFound.into());
    }
    Ok(Json(Removed { msg: "Log removed" }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logs", get(get_logs).post(create_log))
        .route("/logs/search/{text}", get(search_logs))
        .route("/logs/{id}", put(update_log).delete(delete_log))
}
