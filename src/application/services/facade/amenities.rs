//! Amenity operations - catalog maintenance and place pruning

use tracing::{debug, info, instrument};

use crate::application::dto::AmenityView;
use crate::domain::entities::Amenity;
use crate::domain::value_objects::AmenityId;

use super::{FacadeError, ListingFacade};

impl ListingFacade {
    #[instrument(skip(self, name))]
    pub fn create_amenity(
        &mut self,
        name: impl Into<String>,
    ) -> Result<AmenityView, FacadeError> {
        let amenity = Amenity::new(name)?;
        let view = AmenityView::from(self.amenities.save(amenity));
        info!(amenity_id = %view.id, name = %view.name, "Created amenity");
        Ok(view)
    }

    pub fn list_amenities(&self) -> Vec<AmenityView> {
        self.amenities
            .list()
            .into_iter()
            .map(AmenityView::from)
            .collect()
    }

    pub fn get_amenity(&self, id: AmenityId) -> Option<AmenityView> {
        self.amenities.get(&id).map(AmenityView::from)
    }

    #[instrument(skip(self, name))]
    pub fn update_amenity(
        &mut self,
        id: AmenityId,
        name: impl Into<String>,
    ) -> Result<AmenityView, FacadeError> {
        let Some(amenity) = self.amenities.get_mut(&id) else {
            return Err(FacadeError::NotFound("amenity"));
        };
        amenity.rename(name)?;
        let view = AmenityView::from(&*amenity);
        debug!(amenity_id = %id, "Renamed amenity");
        Ok(view)
    }

    /// Removing an amenity first prunes it from every place holding it, so
    /// no place is left with a dangling reference. Pruned places are
    /// touched.
    #[instrument(skip(self))]
    pub fn delete_amenity(&mut self, id: AmenityId) -> bool {
        if self.amenities.get(&id).is_none() {
            return false;
        }
        for place in self.places.iter_mut() {
            place.remove_amenity(id);
        }
        let deleted = self.amenities.delete(&id);
        if deleted {
            info!(amenity_id = %id, "Deleted amenity");
        }
        deleted
    }
}
