//! Listing facade - Orchestration surface over the in-memory repositories
//!
//! The facade owns one repository per entity type, resolves every
//! cross-entity reference by identifier, and enforces the relationship
//! invariants: bidirectional collection membership, cascade deletes, and
//! orphan pruning. Operations are synchronous and run to completion; an
//! embedding host keeps each one atomic by wrapping the facade in a single
//! coarse lock (see `infrastructure::state`).

mod amenities;
mod places;
mod reviews;
mod users;

pub use places::{CreatePlaceRequest, PlaceFilters, UpdatePlaceRequest};
pub use reviews::{CreateReviewRequest, UpdateReviewRequest};
pub use users::{RegisterUserRequest, UpdateUserRequest};

use thiserror::Error;

use crate::application::dto::{AmenityView, PlaceView, ReviewView, UserView};
use crate::domain::entities::{Amenity, Place, Review, User};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::AmenityId;
use crate::infrastructure::persistence::MemoryRepository;

/// Why a facade operation did not produce a view.
///
/// Validation failures and reference misses travel on different variants so
/// the transport layer can answer 400 for one and 404/409 for the other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacadeError {
    /// A referenced entity does not exist; nothing was created or changed.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The operation collides with existing state (duplicate email).
    #[error("{0} already exists")]
    Conflict(&'static str),
    /// A field value was rejected before any state mutation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coordinates the four entity repositories.
pub struct ListingFacade {
    users: MemoryRepository<User>,
    places: MemoryRepository<Place>,
    reviews: MemoryRepository<Review>,
    amenities: MemoryRepository<Amenity>,
}

impl ListingFacade {
    pub fn new() -> Self {
        Self {
            users: MemoryRepository::new(),
            places: MemoryRepository::new(),
            reviews: MemoryRepository::new(),
            amenities: MemoryRepository::new(),
        }
    }

    /// Flatten a place and its entity graph into a response view.
    ///
    /// Owner, amenities, reviews, and the average rating are resolved from
    /// current repository state on every call; nothing is cached.
    fn place_view(&self, place: &Place) -> PlaceView {
        let owner = self.users.get(&place.owner_id).map(UserView::from);
        let amenities: Vec<AmenityView> = place
            .amenity_ids
            .iter()
            .filter_map(|id| self.amenities.get(id))
            .map(AmenityView::from)
            .collect();
        let reviews: Vec<ReviewView> = place
            .review_ids
            .iter()
            .filter_map(|id| self.reviews.get(id))
            .map(ReviewView::from)
            .collect();
        let average_rating = if reviews.is_empty() {
            None
        } else {
            let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            Some(f64::from(total) / reviews.len() as f64)
        };

        PlaceView {
            id: place.id.to_string(),
            name: place.name.clone(),
            description: place.description.clone(),
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner_id: place.owner_id.to_string(),
            owner,
            amenities,
            reviews,
            average_rating,
            created_at: place.created_at.to_rfc3339(),
            updated_at: place.updated_at.to_rfc3339(),
        }
    }

    /// Resolve amenity references, deduplicating while keeping first-seen
    /// order. Any missing id aborts with no partial list.
    fn resolve_amenities(&self, ids: &[AmenityId]) -> Result<Vec<AmenityId>, FacadeError> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            if self.amenities.get(id).is_none() {
                return Err(FacadeError::NotFound("amenity"));
            }
            if !resolved.contains(id) {
                resolved.push(*id);
            }
        }
        Ok(resolved)
    }
}

impl Default for ListingFacade {
    fn default() -> Self {
        Self::new()
    }
}
