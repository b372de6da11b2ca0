//! Review entity - Ratings left by users on places

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{non_empty, ValidationError};
use crate::domain::value_objects::{PlaceId, ReviewId, UserId};

use super::Identifiable;

/// A review of a place
///
/// `user_id` and `place_id` are fixed at creation; only rating and comment
/// are editable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Star rating in 1..=5.
    pub rating: u8,
    pub comment: String,
    pub user_id: UserId,
    pub place_id: PlaceId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial edit; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ReviewEdit {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

impl Review {
    pub fn new(
        rating: u8,
        comment: impl Into<String>,
        user_id: UserId,
        place_id: PlaceId,
    ) -> Result<Self, ValidationError> {
        let comment = comment.into();
        Self::validate(rating, &comment)?;

        let now = Utc::now();
        Ok(Self {
            id: ReviewId::new(),
            rating,
            comment,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct with a known identity (imports, fixtures).
    pub fn with_id(mut self, id: ReviewId) -> Self {
        self.id = id;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Apply the provided fields after re-validating the full resulting
    /// state. No field changes when validation fails.
    pub fn edit(&mut self, edit: ReviewEdit) -> Result<(), ValidationError> {
        let rating = edit.rating.unwrap_or(self.rating);
        let comment = edit.comment.unwrap_or_else(|| self.comment.clone());
        Self::validate(rating, &comment)?;

        self.rating = rating;
        self.comment = comment;
        self.touch();
        Ok(())
    }

    /// Refresh `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn validate(rating: u8, comment: &str) -> Result<(), ValidationError> {
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::new("rating", "must be between 1 and 5"));
        }
        non_empty("comment", comment)?;
        Ok(())
    }
}

impl Identifiable for Review {
    type Id = ReviewId;

    fn id(&self) -> ReviewId {
        self.id
    }
}
