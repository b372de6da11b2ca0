//! Place API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::PlaceView;
use crate::application::services::{
    CreatePlaceRequest as ServiceCreatePlaceRequest, PlaceFilters,
    UpdatePlaceRequest as ServiceUpdatePlaceRequest,
};
use crate::domain::value_objects::{AmenityId, PlaceId, UserId};
use crate::infrastructure::state::AppState;

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct CreatePlaceRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlaceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub amenity_ids: Option<Vec<String>>,
}

/// Listing filters taken from the query string; `amenity_ids` is a
/// comma-separated list of UUIDs.
#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub amenity_ids: Option<String>,
}

fn parse_place_id(id: &str) -> Result<PlaceId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(PlaceId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid place ID".to_string()))
}

fn parse_amenity_ids(ids: &[String]) -> Result<Vec<AmenityId>, (StatusCode, String)> {
    ids.iter()
        .map(|id| {
            Uuid::parse_str(id)
                .map(AmenityId::from_uuid)
                .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid amenity ID".to_string()))
        })
        .collect()
}

/// List places, optionally filtered
pub async fn list_places(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<Vec<PlaceView>>, (StatusCode, String)> {
    let amenity_ids = match query.amenity_ids {
        Some(ref raw) => {
            let parts: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            parse_amenity_ids(&parts)?
        }
        None => Vec::new(),
    };

    let filters = PlaceFilters {
        min_price: query.min_price,
        max_price: query.max_price,
        lat: query.lat,
        lng: query.lng,
        radius: query.radius,
        amenity_ids,
    };

    Ok(Json(state.facade.read().await.list_places(&filters)))
}

/// Create a place
pub async fn create_place(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePlaceRequest>,
) -> Result<(StatusCode, Json<PlaceView>), (StatusCode, String)> {
    let owner_id = Uuid::parse_str(&req.owner_id)
        .map(UserId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid owner ID".to_string()))?;
    let amenity_ids = parse_amenity_ids(&req.amenity_ids)?;

    let place = state
        .facade
        .write()
        .await
        .create_place(ServiceCreatePlaceRequest {
            name: req.name,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            owner_id,
            amenity_ids,
        })
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(place)))
}

/// Get a place by ID with its flattened entity graph
pub async fn get_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlaceView>, (StatusCode, String)> {
    let place_id = parse_place_id(&id)?;

    let place = state
        .facade
        .read()
        .await
        .get_place(place_id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Place not found".to_string()))?;

    Ok(Json(place))
}

/// Update a place
pub async fn update_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlaceRequest>,
) -> Result<Json<PlaceView>, (StatusCode, String)> {
    let place_id = parse_place_id(&id)?;
    let amenity_ids = match req.amenity_ids {
        Some(ref ids) => Some(parse_amenity_ids(ids)?),
        None => None,
    };

    let place = state
        .facade
        .write()
        .await
        .update_place(
            place_id,
            ServiceUpdatePlaceRequest {
                name: req.name,
                description: req.description,
                price: req.price,
                latitude: req.latitude,
                longitude: req.longitude,
                amenity_ids,
            },
        )
        .map_err(error_response)?;

    Ok(Json(place))
}

/// Delete a place and its reviews
pub async fn delete_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let place_id = parse_place_id(&id)?;

    if state.facade.write().await.delete_place(place_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Place not found".to_string()))
    }
}
