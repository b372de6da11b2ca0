//! HTTP REST API routes

mod amenity_routes;
mod place_routes;
mod review_routes;
mod user_routes;

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::application::services::FacadeError;
use crate::infrastructure::state::AppState;

pub use amenity_routes::*;
pub use place_routes::*;
pub use review_routes::*;
pub use user_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // User routes
        .route("/api/users", get(user_routes::list_users))
        .route("/api/users", post(user_routes::create_user))
        .route("/api/users/{id}", get(user_routes::get_user))
        .route("/api/users/{id}", put(user_routes::update_user))
        .route("/api/users/{id}", delete(user_routes::delete_user))
        // Amenity routes
        .route("/api/amenities", get(amenity_routes::list_amenities))
        .route("/api/amenities", post(amenity_routes::create_amenity))
        .route("/api/amenities/{id}", get(amenity_routes::get_amenity))
        .route("/api/amenities/{id}", put(amenity_routes::update_amenity))
        .route(
            "/api/amenities/{id}",
            delete(amenity_routes::delete_amenity),
        )
        // Place routes
        .route("/api/places", get(place_routes::list_places))
        .route("/api/places", post(place_routes::create_place))
        .route("/api/places/{id}", get(place_routes::get_place))
        .route("/api/places/{id}", put(place_routes::update_place))
        .route("/api/places/{id}", delete(place_routes::delete_place))
        // Review routes
        .route("/api/reviews", get(review_routes::list_reviews))
        .route("/api/reviews", post(review_routes::create_review))
        .route("/api/reviews/{id}", get(review_routes::get_review))
        .route("/api/reviews/{id}", put(review_routes::update_review))
        .route("/api/reviews/{id}", delete(review_routes::delete_review))
}

/// Map facade outcomes onto transport status codes: rejected fields are the
/// caller's fault (400), missing references answer 404, duplicates 409.
fn error_response(error: FacadeError) -> (StatusCode, String) {
    let status = match error {
        FacadeError::NotFound(_) => StatusCode::NOT_FOUND,
        FacadeError::Conflict(_) => StatusCode::CONFLICT,
        FacadeError::Validation(_) => StatusCode::BAD_REQUEST,
    };
    (status, error.to_string())
}
