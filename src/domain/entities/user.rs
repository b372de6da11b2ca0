//! User entity - Account holders who own places and author reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{non_empty, ValidationError};
use crate::domain::value_objects::{PlaceId, ReviewId, UserId};

use super::Identifiable;

/// An account in the listing system
///
/// Relationship collections hold identifiers only. The canonical Place and
/// Review instances live in their repositories and are resolved by id, so
/// there is exactly one mutable instance per identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as given; hashing belongs to an outer layer.
    pub password: String,
    pub is_admin: bool,
    /// Places owned by this user, in creation order.
    pub place_ids: Vec<PlaceId>,
    /// Reviews authored by this user, in creation order.
    pub review_ids: Vec<ReviewId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        is_admin: bool,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();
        let password = password.into();
        Self::validate(&first_name, &last_name, &email, &password)?;

        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            first_name,
            last_name,
            email,
            password,
            is_admin,
            place_ids: Vec::new(),
            review_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct with a known identity (imports, fixtures).
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Apply the provided profile fields after re-validating the full
    /// resulting state. No field changes when validation fails.
    pub fn update_profile(&mut self, update: UserProfileUpdate) -> Result<(), ValidationError> {
        let first_name = update.first_name.unwrap_or_else(|| self.first_name.clone());
        let last_name = update.last_name.unwrap_or_else(|| self.last_name.clone());
        let email = update.email.unwrap_or_else(|| self.email.clone());
        let password = update.password.unwrap_or_else(|| self.password.clone());
        Self::validate(&first_name, &last_name, &email, &password)?;

        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.password = password;
        self.touch();
        Ok(())
    }

    pub fn add_place(&mut self, place_id: PlaceId) {
        if !self.place_ids.contains(&place_id) {
            self.place_ids.push(place_id);
            self.touch();
        }
    }

    pub fn remove_place(&mut self, place_id: PlaceId) {
        self.place_ids.retain(|id| *id != place_id);
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
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ValidationError> {
        non_empty("first_name", first_name)?;
        non_empty("last_name", last_name)?;
        non_empty("email", email)?;
        non_empty("password", password)?;
        // Deliberately shallow format check, not an RFC validator.
        if !email.contains('@') {
            return Err(ValidationError::new("email", "must contain '@'"));
        }
        Ok(())
    }
}

impl Identifiable for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}
