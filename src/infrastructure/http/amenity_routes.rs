//! Amenity API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::AmenityView;
use crate::domain::value_objects::AmenityId;
use crate::infrastructure::state::AppState;

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct CreateAmenityRequest {
    pub name: String,
}

fn parse_amenity_id(id: &str) -> Result<AmenityId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(AmenityId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid amenity ID".to_string()))
}

/// List amenities
pub async fn list_amenities(State(state): State<Arc<AppState>>) -> Json<Vec<AmenityView>> {
    Json(state.facade.read().await.list_amenities())
}

/// Create an amenity
pub async fn create_amenity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAmenityRequest>,
) -> Result<(StatusCode, Json<AmenityView>), (StatusCode, String)> {
    let amenity = state
        .facade
        .write()
        .await
        .create_amenity(req.name)
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(amenity)))
}

/// Get an amenity by ID
pub async fn get_amenity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AmenityView>, (StatusCode, String)> {
    let amenity_id = parse_amenity_id(&id)?;

    let amenity = state
        .facade
        .read()
        .await
        .get_amenity(amenity_id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Amenity not found".to_string()))?;

    Ok(Json(amenity))
}

/// Rename an amenity
pub async fn update_amenity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CreateAmenityRequest>,
) -> Result<Json<AmenityView>, (StatusCode, String)> {
    let amenity_id = parse_amenity_id(&id)?;

    let amenity = state
        .facade
        .write()
        .await
        .update_amenity(amenity_id, req.name)
        .map_err(error_response)?;

    Ok(Json(amenity))
}

/// Delete an amenity, pruning it from every place
pub async fn delete_amenity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let amenity_id = parse_amenity_id(&id)?;

    if state.facade.write().await.delete_amenity(amenity_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Amenity not found".to_string()))
    }
}
