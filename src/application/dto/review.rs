use serde::Serialize;

use crate::domain::entities::Review;

/// Transport-shaped projection of a review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub user_id: String,
    pub place_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            rating: review.rating,
            comment: review.comment.clone(),
            user_id: review.user_id.to_string(),
            place_id: review.place_id.to_string(),
            created_at: review.created_at.to_rfc3339(),
            updated_at: review.updated_at.to_rfc3339(),
        }
    }
}
