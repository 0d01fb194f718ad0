use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use db::models::tech::{CreateTech, Tech, TechError};
use serde::Deserialize;
use ts_rs::TS;

use crate::{
    AppState,
    error::{ApiError, FieldError},
    routes::{Removed, parse_id},
};

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateTechRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateTechRequest {
    fn validate(self) -> Result<CreateTech, ApiError> {
        let mut errors = Vec::new();
        if self.first_name.as_deref().unwrap_or("").is_empty() {
            errors.push(FieldError::new("firstName", "First name is required"));
        }
        if self.last_name.as_deref().unwrap_or("").is_empty() {
            errors.push(FieldError::new("lastName", "Last name is required"));
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(CreateTech {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        })
    }
}

pub async fn get_techs(State(state): State<AppState>) -> Result<Json<Vec<Tech>>, ApiError> {
    Ok(Json(Tech::find_all(&state.db.conn).await?))
}

pub async fn create_tech(
    State(state): State<AppState>,
    Json(payload): Json<CreateTechRequest>,
) -> Result<Json<Tech>, ApiError> {
    let data = payload.validate()?;
    Ok(Json(Tech::create(&state.db.conn, &data).await?))
}

pub async fn delete_tech(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Removed>, ApiError> {
    let id = parse_id(&id)?;
    let rows = Tech::delete(&state.db.conn, id).await?;
    if rows == 0 {
        return Err(TechError::NotFound.into());
    }
    Ok(Json(Removed { msg: "Tech removed" }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/techs", get(get_techs).post(create_tech))
        .route("/techs/{id}", delete(delete_tech))
}
