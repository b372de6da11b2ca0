//! Review API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::ReviewView;
use crate::application::services::{
    CreateReviewRequest as ServiceCreateReviewRequest,
    UpdateReviewRequest as ServiceUpdateReviewRequest,
};
use crate::domain::value_objects::{PlaceId, ReviewId, UserId};
use crate::infrastructure::state::AppState;

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: u8,
    pub comment: String,
    pub user_id: String,
    pub place_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
}

fn parse_review_id(id: &str) -> Result<ReviewId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(ReviewId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid review ID".to_string()))
}

/// List reviews
pub async fn list_reviews(State(state): State<Arc<AppState>>) -> Json<Vec<ReviewView>> {
    Json(state.facade.read().await.list_reviews())
}

/// Create a review
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewView>), (StatusCode, String)> {
    let user_id = Uuid::parse_str(&req.user_id)
        .map(UserId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid user ID".to_string()))?;
    let place_id = Uuid::parse_str(&req.place_id)
        .map(PlaceId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid place ID".to_string()))?;

    let review = state
        .facade
        .write()
        .await
        .create_review(ServiceCreateReviewRequest {
            rating: req.rating,
            comment: req.comment,
            user_id,
            place_id,
        })
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Get a review by ID
pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ReviewView>, (StatusCode, String)> {
    let review_id = parse_review_id(&id)?;

    let review = state
        .facade
        .read()
        .await
        .get_review(review_id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Review not found".to_string()))?;

    Ok(Json(review))
}

/// Update a review's rating or comment
pub async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewView>, (StatusCode, String)> {
    let review_id = parse_review_id(&id)?;

    let review = state
        .facade
        .write()
        .await
        .update_review(
            review_id,
            ServiceUpdateReviewRequest {
                rating: req.rating,
                comment: req.comment,
            },
        )
        .map_err(error_response)?;

    Ok(Json(review))
}

/// Delete a review, detaching it from its author and place
pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let review_id = parse_review_id(&id)?;

    if state.facade.write().await.delete_review(review_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Review not found".to_string()))
    }
}
