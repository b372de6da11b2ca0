//! User operations - registration, profile updates, cascade deletion

use tracing::{debug, info, instrument};

use crate::application::dto::UserView;
use crate::domain::entities::{User, UserProfileUpdate};
use crate::domain::value_objects::UserId;

use super::{FacadeError, ListingFacade};

/// Request to register a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// Request to update an existing user; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl ListingFacade {
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub fn register_user(&mut self, request: RegisterUserRequest) -> Result<UserView, FacadeError> {
        if self
            .users
            .find_by_field(|u: &User| u.email.as_str(), request.email.as_str())
            .is_some()
        {
            return Err(FacadeError::Conflict("email"));
        }

        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            request.password,
            request.is_admin,
        )?;
        let view = UserView::from(self.users.save(user));
        info!(user_id = %view.id, "Registered user");
        Ok(view)
    }

    pub fn list_users(&self) -> Vec<UserView> {
        self.users.list().into_iter().map(UserView::from).collect()
    }

    pub fn get_user(&self, id: UserId) -> Option<UserView> {
        self.users.get(&id).map(UserView::from)
    }

    #[instrument(skip(self, request))]
    pub fn update_user(
        &mut self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> Result<UserView, FacadeError> {
        if self.users.get(&id).is_none() {
            return Err(FacadeError::NotFound("user"));
        }
        // Keep emails unique across users; the user may resubmit its own.
        if let Some(ref email) = request.email {
            if self
                .users
                .find_first(|u| u.id != id && u.email == *email)
                .is_some()
            {
                return Err(FacadeError::Conflict("email"));
            }
        }

        let Some(user) = self.users.get_mut(&id) else {
            return Err(FacadeError::NotFound("user"));
        };
        user.update_profile(UserProfileUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
        })?;
        if let Some(is_admin) = request.is_admin {
            user.is_admin = is_admin;
        }

        let view = UserView::from(&*user);
        debug!(user_id = %view.id, "Updated user");
        Ok(view)
    }

    /// Deleting a user removes everything hanging off it: owned places
    /// (each cascading to its reviews), then whichever authored reviews
    /// survived the place cascade, then the user record itself.
    #[instrument(skip(self))]
    pub fn delete_user(&mut self, id: UserId) -> bool {
        if self.users.get(&id).is_none() {
            return false;
        }

        // Snapshot before iterating; the cascades mutate these collections.
        let place_ids = self
            .users
            .get(&id)
            .map(|u| u.place_ids.clone())
            .unwrap_or_default();
        for place_id in place_ids {
            self.delete_place(place_id);
        }

        // Re-read: reviews on the user's own places are already gone.
        let review_ids = self
            .users
            .get(&id)
            .map(|u| u.review_ids.clone())
            .unwrap_or_default();
        for review_id in review_ids {
            self.delete_review(review_id);
        }

        let deleted = self.users.delete(&id);
        if deleted {
            info!(user_id = %id, "Deleted user");
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::facade::{CreatePlaceRequest, CreateReviewRequest};
    use crate::domain::value_objects::PlaceId;
    use uuid::Uuid;

    fn register(facade: &mut ListingFacade, email: &str) -> UserId {
        let view = facade
            .register_user(RegisterUserRequest {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: email.to_string(),
                password: "secret".to_string(),
                is_admin: false,
            })
            .unwrap();
        UserId::from_uuid(Uuid::parse_str(&view.id).unwrap())
    }

    fn add_place(facade: &mut ListingFacade, owner_id: UserId) -> PlaceId {
        let view = facade
            .create_place(CreatePlaceRequest {
                name: "Loft".to_string(),
                description: None,
                price: 100.0,
                latitude: 10.0,
                longitude: 20.0,
                owner_id,
                amenity_ids: Vec::new(),
            })
            .unwrap();
        PlaceId::from_uuid(Uuid::parse_str(&view.id).unwrap())
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let mut facade = ListingFacade::new();
        register(&mut facade, "ada@example.com");

        let second = facade.register_user(RegisterUserRequest {
            first_name: "Other".to_string(),
            last_name: "Person".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            is_admin: false,
        });
        assert_eq!(second, Err(FacadeError::Conflict("email")));
        assert_eq!(facade.list_users().len(), 1);
    }

    #[test]
    fn test_register_rejects_invalid_fields() {
        let mut facade = ListingFacade::new();
        let result = facade.register_user(RegisterUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "no-at-sign".to_string(),
            password: "secret".to_string(),
            is_admin: false,
        });
        assert!(matches!(result, Err(FacadeError::Validation(_))));
        assert!(facade.list_users().is_empty());
    }

    #[test]
    fn test_update_user_partial_and_not_found() {
        let mut facade = ListingFacade::new();
        let id = register(&mut facade, "ada@example.com");

        let view = facade
            .update_user(
                id,
                UpdateUserRequest {
                    first_name: Some("Augusta".to_string()),
                    is_admin: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(view.first_name, "Augusta");
        assert!(view.is_admin);
        assert_eq!(view.email, "ada@example.com");

        let missing = facade.update_user(UserId::new(), UpdateUserRequest::default());
        assert_eq!(missing, Err(FacadeError::NotFound("user")));
    }

    #[test]
    fn test_update_user_rejects_taken_email() {
        let mut facade = ListingFacade::new();
        register(&mut facade, "ada@example.com");
        let other = register(&mut facade, "grace@example.com");

        let result = facade.update_user(
            other,
            UpdateUserRequest {
                email: Some("ada@example.com".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(FacadeError::Conflict("email")));

        // Resubmitting your own email is not a conflict.
        let own = facade.update_user(
            other,
            UpdateUserRequest {
                email: Some("grace@example.com".to_string()),
                ..Default::default()
            },
        );
        assert!(own.is_ok());
    }

    #[test]
    fn test_delete_user_cascades_places_and_reviews() {
        let mut facade = ListingFacade::new();
        let owner = register(&mut facade, "owner@example.com");
        let guest = register(&mut facade, "guest@example.com");

        let owned_place = add_place(&mut facade, owner);
        let other_place = add_place(&mut facade, guest);

        // Owner reviews the guest's place; guest reviews the owner's place.
        facade
            .create_review(CreateReviewRequest {
                rating: 4,
                comment: "nice".to_string(),
                user_id: owner,
                place_id: other_place,
            })
            .unwrap();
        facade
            .create_review(CreateReviewRequest {
                rating: 5,
                comment: "great".to_string(),
                user_id: guest,
                place_id: owned_place,
            })
            .unwrap();

        assert!(facade.delete_user(owner));

        // The owner, its place, its authored review, and the review on its
        // place are all gone.
        assert!(facade.get_user(owner).is_none());
        assert!(facade.get_place(owned_place).is_none());
        assert!(facade.list_reviews().is_empty());

        // No dangling references remain on the surviving entities.
        let surviving = facade.get_place(other_place).unwrap();
        assert!(surviving.reviews.is_empty());
        assert_eq!(surviving.average_rating, None);
        assert!(facade.users.get(&guest).unwrap().review_ids.is_empty());
        assert!(facade.reviews.is_empty());

        // Repeated deletion reports absence.
        assert!(!facade.delete_user(owner));
    }
}
