//! Review operations - creation, edits, detach-on-delete

use tracing::{debug, info, instrument};

use crate::application::dto::ReviewView;
use crate::domain::entities::{Review, ReviewEdit};
use crate::domain::value_objects::{PlaceId, ReviewId, UserId};

use super::{FacadeError, ListingFacade};

/// Request to create a new review
#[derive(Debug, Clone)]
pub struct CreateReviewRequest {
    pub rating: u8,
    pub comment: String,
    pub user_id: UserId,
    pub place_id: PlaceId,
}

/// Request to edit an existing review; author and place are fixed at
/// creation and cannot be changed here
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewRequest {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

impl ListingFacade {
    #[instrument(skip(self, request), fields(user_id = %request.user_id, place_id = %request.place_id))]
    pub fn create_review(
        &mut self,
        request: CreateReviewRequest,
    ) -> Result<ReviewView, FacadeError> {
        if self.users.get(&request.user_id).is_none() {
            return Err(FacadeError::NotFound("user"));
        }
        if self.places.get(&request.place_id).is_none() {
            return Err(FacadeError::NotFound("place"));
        }

        let review = Review::new(
            request.rating,
            request.comment,
            request.user_id,
            request.place_id,
        )?;
        let review_id = review.id;
        let view = ReviewView::from(self.reviews.save(review));

        // Membership is bidirectional: the author and the place both track
        // the new review.
        if let Some(user) = self.users.get_mut(&request.user_id) {
            user.add_review(review_id);
        }
        if let Some(place) = self.places.get_mut(&request.place_id) {
            place.add_review(review_id);
        }

        info!(review_id = %review_id, "Created review");
        Ok(view)
    }

    pub fn list_reviews(&self) -> Vec<ReviewView> {
        self.reviews
            .list()
            .into_iter()
            .map(ReviewView::from)
            .collect()
    }

    pub fn get_review(&self, id: ReviewId) -> Option<ReviewView> {
        self.reviews.get(&id).map(ReviewView::from)
    }

    #[instrument(skip(self, request))]
    pub fn update_review(
        &mut self,
        id: ReviewId,
        request: UpdateReviewRequest,
    ) -> Result<ReviewView, FacadeError> {
        let Some(review) = self.reviews.get_mut(&id) else {
            return Err(FacadeError::NotFound("review"));
        };
        review.edit(ReviewEdit {
            rating: request.rating,
            comment: request.comment,
        })?;
        let view = ReviewView::from(&*review);
        debug!(review_id = %id, "Updated review");
        Ok(view)
    }

    /// Detachment is defensive: a missing author or place skips that side,
    /// and the review record is removed regardless.
    #[instrument(skip(self))]
    pub fn delete_review(&mut self, id: ReviewId) -> bool {
        let Some(review) = self.reviews.get(&id) else {
            return false;
        };
        let user_id = review.user_id;
        let place_id = review.place_id;

        if let Some(user) = self.users.get_mut(&user_id) {
            user.remove_review(id);
        }
        if let Some(place) = self.places.get_mut(&place_id) {
            place.remove_review(id);
        }

        let deleted = self.reviews.delete(&id);
        if deleted {
            info!(review_id = %id, "Deleted review");
        }
        deleted
    }
}
