use serde::Serialize;

use super::{AmenityView, ReviewView, UserView};

/// Transport-shaped projection of a place with its entity graph flattened:
/// owner, amenity, and review summaries plus the derived average rating.
///
/// Assembled by the facade from current repository state on every
/// serialization; nothing here is cached or denormalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub owner: Option<UserView>,
    pub amenities: Vec<AmenityView>,
    pub reviews: Vec<ReviewView>,
    /// Mean of the attached review ratings; `None` with zero reviews.
    pub average_rating: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}
