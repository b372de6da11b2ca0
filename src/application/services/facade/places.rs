//! Place operations - listings, filtered search, relationship wiring

use tracing::{debug, info, instrument};

use crate::application::dto::PlaceView;
use crate::domain::entities::{Place, PlaceUpdate};
use crate::domain::value_objects::{AmenityId, PlaceId, UserId};

use super::{FacadeError, ListingFacade};

/// Rough planar distance for radius filtering; deliberately not geodesic.
fn planar_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lng1 - lng2).powi(2)).sqrt()
}

/// Request to create a new place
#[derive(Debug, Clone)]
pub struct CreatePlaceRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: UserId,
    pub amenity_ids: Vec<AmenityId>,
}

/// Request to update an existing place; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdatePlaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// `Some` replaces the whole amenity collection, `None` leaves it alone.
    pub amenity_ids: Option<Vec<AmenityId>>,
}

/// Conjunctive listing filters; an absent field does not constrain.
///
/// The radius filter only applies when `lat`, `lng`, and `radius` are all
/// present. An empty `amenity_ids` never excludes anything.
#[derive(Debug, Clone, Default)]
pub struct PlaceFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub amenity_ids: Vec<AmenityId>,
}

impl PlaceFilters {
    fn matches(&self, place: &Place) -> bool {
        if let Some(min_price) = self.min_price {
            if place.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if place.price > max_price {
                return false;
            }
        }
        if let (Some(lat), Some(lng), Some(radius)) = (self.lat, self.lng, self.radius) {
            if planar_distance(lat, lng, place.latitude, place.longitude) > radius {
                return false;
            }
        }
        self.amenity_ids
            .iter()
            .all(|id| place.amenity_ids.contains(id))
    }
}

impl ListingFacade {
    #[instrument(skip(self, request), fields(name = %request.name, owner_id = %request.owner_id))]
    pub fn create_place(&mut self, request: CreatePlaceRequest) -> Result<PlaceView, FacadeError> {
        if self.users.get(&request.owner_id).is_none() {
            return Err(FacadeError::NotFound("owner"));
        }
        let amenity_ids = self.resolve_amenities(&request.amenity_ids)?;

        let owner_id = request.owner_id;
        let place = Place::new(
            request.name,
            request.description,
            request.price,
            request.latitude,
            request.longitude,
            owner_id,
        )?
        .with_amenities(amenity_ids);
        let place_id = place.id;
        self.places.save(place);
        if let Some(owner) = self.users.get_mut(&owner_id) {
            owner.add_place(place_id);
        }

        info!(place_id = %place_id, "Created place");
        self.places
            .get(&place_id)
            .map(|p| self.place_view(p))
            .ok_or(FacadeError::NotFound("place"))
    }

    pub fn list_places(&self, filters: &PlaceFilters) -> Vec<PlaceView> {
        self.places
            .filter(|place| filters.matches(place))
            .into_iter()
            .map(|place| self.place_view(place))
            .collect()
    }

    pub fn get_place(&self, id: PlaceId) -> Option<PlaceView> {
        self.places.get(&id).map(|place| self.place_view(place))
    }

    /// Field changes and amenity replacement commit together or not at all:
    /// references are resolved first, the validating field update runs
    /// next, and the replacement lands only once both have succeeded.
    #[instrument(skip(self, request))]
    pub fn update_place(
        &mut self,
        id: PlaceId,
        request: UpdatePlaceRequest,
    ) -> Result<PlaceView, FacadeError> {
        if self.places.get(&id).is_none() {
            return Err(FacadeError::NotFound("place"));
        }
        let replacement = match request.amenity_ids {
            Some(ref ids) => Some(self.resolve_amenities(ids)?),
            None => None,
        };

        let Some(place) = self.places.get_mut(&id) else {
            return Err(FacadeError::NotFound("place"));
        };
        place.apply_update(PlaceUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            latitude: request.latitude,
            longitude: request.longitude,
        })?;
        if let Some(amenity_ids) = replacement {
            place.amenity_ids = amenity_ids;
        }

        debug!(place_id = %id, "Updated place");
        self.places
            .get(&id)
            .map(|p| self.place_view(p))
            .ok_or(FacadeError::NotFound("place"))
    }

    /// Deleting a place detaches it from its owner (when the owner still
    /// exists) and cascades to its reviews before removing the record.
    #[instrument(skip(self))]
    pub fn delete_place(&mut self, id: PlaceId) -> bool {
        let Some(place) = self.places.get(&id) else {
            return false;
        };
        let owner_id = place.owner_id;
        let review_ids = place.review_ids.clone();

        if let Some(owner) = self.users.get_mut(&owner_id) {
            owner.remove_place(id);
        }
        for review_id in review_ids {
            self.delete_review(review_id);
        }

        let deleted = self.places.delete(&id);
        if deleted {
            info!(place_id = %id, "Deleted place");
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::facade::{CreateReviewRequest, RegisterUserRequest};
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

    fn amenity(facade: &mut ListingFacade, name: &str) -> AmenityId {
        let view = facade.create_amenity(name).unwrap();
        AmenityId::from_uuid(Uuid::parse_str(&view.id).unwrap())
    }

    fn place_request(owner_id: UserId, price: f64, lat: f64, lng: f64) -> CreatePlaceRequest {
        CreatePlaceRequest {
            name: "Loft".to_string(),
            description: None,
            price,
            latitude: lat,
            longitude: lng,
            owner_id,
            amenity_ids: Vec::new(),
        }
    }

    fn create(facade: &mut ListingFacade, request: CreatePlaceRequest) -> PlaceId {
        let view = facade.create_place(request).unwrap();
        PlaceId::from_uuid(Uuid::parse_str(&view.id).unwrap())
    }

    #[test]
    fn test_create_place_requires_owner() {
        let mut facade = ListingFacade::new();
        let result = facade.create_place(place_request(UserId::new(), 100.0, 10.0, 20.0));
        assert_eq!(result, Err(FacadeError::NotFound("owner")));
        assert!(facade.places.is_empty());
    }

    #[test]
    fn test_create_place_requires_every_amenity() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "ada@example.com");
        let wifi = amenity(&mut facade, "Wifi");

        let mut request = place_request(owner_id, 100.0, 10.0, 20.0);
        request.amenity_ids = vec![wifi, AmenityId::new()];
        let result = facade.create_place(request);

        assert_eq!(result, Err(FacadeError::NotFound("amenity")));
        assert!(facade.places.is_empty());
        assert_eq!(facade.amenities.len(), 1);
    }

    #[test]
    fn test_create_place_serializes_graph() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "a@x.com");
        let wifi = amenity(&mut facade, "Wifi");

        let mut request = place_request(owner_id, 100.0, 10.0, 20.0);
        request.amenity_ids = vec![wifi];
        let view = facade.create_place(request).unwrap();

        assert_eq!(view.owner.as_ref().map(|o| o.email.as_str()), Some("a@x.com"));
        assert_eq!(view.amenities.len(), 1);
        assert_eq!(view.amenities[0].name, "Wifi");
        assert!(view.reviews.is_empty());
        assert_eq!(view.average_rating, None);
    }

    #[test]
    fn test_list_places_price_and_amenity_filters() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "ada@example.com");
        let wifi = amenity(&mut facade, "Wifi");
        let pool = amenity(&mut facade, "Pool");

        let mut cheap = place_request(owner_id, 40.0, 0.0, 0.0);
        cheap.amenity_ids = vec![wifi, pool];
        create(&mut facade, cheap);

        let mut mid = place_request(owner_id, 100.0, 0.0, 0.0);
        mid.amenity_ids = vec![wifi, pool];
        let mid_id = create(&mut facade, mid);

        let mut high = place_request(owner_id, 150.0, 0.0, 0.0);
        high.amenity_ids = vec![wifi];
        let high_id = create(&mut facade, high);

        create(&mut facade, place_request(owner_id, 200.0, 0.0, 0.0));

        let in_range = facade.list_places(&PlaceFilters {
            min_price: Some(50.0),
            max_price: Some(150.0),
            ..Default::default()
        });
        let mut ids: Vec<&str> = in_range.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        let mut expected = vec![mid_id.to_string(), high_id.to_string()];
        expected.sort_unstable();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());

        // Bounds are inclusive.
        let exact = facade.list_places(&PlaceFilters {
            min_price: Some(150.0),
            max_price: Some(150.0),
            ..Default::default()
        });
        assert_eq!(exact.len(), 1);

        // Superset requirement on amenities, combined with the price range.
        let both = facade.list_places(&PlaceFilters {
            min_price: Some(50.0),
            max_price: Some(150.0),
            amenity_ids: vec![wifi, pool],
            ..Default::default()
        });
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, mid_id.to_string());
    }

    #[test]
    fn test_list_places_radius_filter() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "ada@example.com");
        let near = create(&mut facade, place_request(owner_id, 50.0, 10.0, 20.0));
        create(&mut facade, place_request(owner_id, 50.0, 30.0, 60.0));

        let found = facade.list_places(&PlaceFilters {
            lat: Some(10.5),
            lng: Some(20.5),
            radius: Some(1.0),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, near.to_string());

        // Radius needs all three coordinates; a partial pair is ignored.
        let unconstrained = facade.list_places(&PlaceFilters {
            lat: Some(10.5),
            lng: Some(20.5),
            ..Default::default()
        });
        assert_eq!(unconstrained.len(), 2);
    }

    #[test]
    fn test_update_place_replaces_amenities_atomically() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "ada@example.com");
        let wifi = amenity(&mut facade, "Wifi");
        let pool = amenity(&mut facade, "Pool");

        let mut request = place_request(owner_id, 100.0, 10.0, 20.0);
        request.amenity_ids = vec![wifi];
        let place_id = create(&mut facade, request);

        // A missing id aborts the whole update.
        let result = facade.update_place(
            place_id,
            UpdatePlaceRequest {
                amenity_ids: Some(vec![pool, AmenityId::new()]),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(FacadeError::NotFound("amenity")));
        let view = facade.get_place(place_id).unwrap();
        assert_eq!(view.amenities.len(), 1);
        assert_eq!(view.amenities[0].name, "Wifi");

        // A valid list replaces, never merges.
        let view = facade
            .update_place(
                place_id,
                UpdatePlaceRequest {
                    amenity_ids: Some(vec![pool]),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(view.amenities.len(), 1);
        assert_eq!(view.amenities[0].name, "Pool");
    }

    #[test]
    fn test_update_place_validation_leaves_amenities_alone() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "ada@example.com");
        let wifi = amenity(&mut facade, "Wifi");
        let pool = amenity(&mut facade, "Pool");

        let mut request = place_request(owner_id, 100.0, 10.0, 20.0);
        request.amenity_ids = vec![wifi];
        let place_id = create(&mut facade, request);

        let result = facade.update_place(
            place_id,
            UpdatePlaceRequest {
                price: Some(-10.0),
                amenity_ids: Some(vec![pool]),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(FacadeError::Validation(_))));

        let view = facade.get_place(place_id).unwrap();
        assert_eq!(view.price, 100.0);
        assert_eq!(view.amenities[0].name, "Wifi");
    }

    #[test]
    fn test_delete_place_detaches_owner_and_reviews() {
        let mut facade = ListingFacade::new();
        let owner_id = register(&mut facade, "owner@example.com");
        let guest_id = register(&mut facade, "guest@example.com");
        let place_id = create(&mut facade, place_request(owner_id, 100.0, 10.0, 20.0));

        facade
            .create_review(CreateReviewRequest {
                rating: 5,
                comment: "great".to_string(),
                user_id: guest_id,
                place_id,
            })
            .unwrap();

        assert!(facade.delete_place(place_id));
        assert!(!facade.delete_place(place_id));
        assert!(facade.reviews.is_empty());
        assert!(facade.users.get(&owner_id).unwrap().place_ids.is_empty());
        assert!(facade.users.get(&guest_id).unwrap().review_ids.is_empty());
    }
}
