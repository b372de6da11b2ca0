//! Place entity - Rental listings with location, pricing, and relationships

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{non_empty, ValidationError};
use crate::domain::value_objects::{AmenityId, PlaceId, ReviewId, UserId};

use super::Identifiable;

/// A rental listing
///
/// Amenity membership is unordered-unique; reviews keep creation order.
/// Both collections hold identifiers resolved through the repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: Option<String>,
    /// Nightly price, non-negative.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: UserId,
    pub amenity_ids: Vec<AmenityId>,
    pub review_ids: Vec<ReviewId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial field update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: UserId,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate(&name, price, latitude, longitude)?;

        let now = Utc::now();
        Ok(Self {
            id: PlaceId::new(),
            name,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenity_ids: Vec::new(),
            review_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct with a known identity (imports, fixtures).
    pub fn with_id(mut self, id: PlaceId) -> Self {
        self.id = id;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Attach an already-resolved amenity collection at construction time.
    pub fn with_amenities(mut self, amenity_ids: Vec<AmenityId>) -> Self {
        self.amenity_ids = amenity_ids;
        self
    }

    /// Apply the provided fields after re-validating the full resulting
    /// state. No field changes when validation fails; `updated_at` is
    /// refreshed whenever the update goes through.
    pub fn apply_update(&mut self, update: PlaceUpdate) -> Result<(), ValidationError> {
        let name = update.name.unwrap_or_else(|| self.name.clone());
        let price = update.price.unwrap_or(self.price);
        let latitude = update.latitude.unwrap_or(self.latitude);
        let longitude = update.longitude.unwrap_or(self.longitude);
        Self::validate(&name, price, latitude, longitude)?;

        self.name = name;
        if update.description.is_some() {
            self.description = update.description;
        }
        self.price = price;
        self.latitude = latitude;
        self.longitude = longitude;
        self.touch();
        Ok(())
    }

    pub fn add_amenity(&mut self, amenity_id: AmenityId) {
        if !self.amenity_ids.contains(&amenity_id) {
            self.amenity_ids.push(amenity_id);
            self.touch();
        }
    }

    /// Detach an amenity; returns whether it was present. Touches on removal
    /// so pruned places surface as modified.
    pub fn remove_amenity(&mut self, amenity_id: AmenityId) -> bool {
        let before = self.amenity_ids.len();
        self.amenity_ids.retain(|id| *id != amenity_id);
        if self.amenity_ids.len() < before {
            self.touch();
            return true;
        }
        false
    }

    pub fn add_review(&mut self, review_id: ReviewId) {
        self.review_ids.push(review_id);
        self.touch();
    }

    pub fn remove_review(&mut self, review_id: ReviewId) {
        self.review_ids.retain(|id| *id != review_id);
    }

    /// Refresh `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn validate(
        name: &str,
        price: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), ValidationError> {
        non_empty("name", name)?;
        if price < 0.0 {
            return Err(ValidationError::new(
                "price",
                "must be a non-negative number",
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::new(
                "latitude",
                "must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::new(
                "longitude",
                "must be between -180 and 180",
            ));
        }
        Ok(())
    }
}

impl Identifiable for Place {
    type Id = PlaceId;

    fn id(&self) -> PlaceId {
        self.id
    }
}
